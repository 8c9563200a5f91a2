//! JSON configuration and command-line parsing for the tools.

pub mod heightfield;

pub use heightfield::{
    load_config, parse_cli, parse_config, parse_corners, usage, HeightfieldConfig, OutputConfig,
};
