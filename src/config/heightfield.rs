use crate::grid::{size_for_levels, Corners, HeightGrid};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON report. `None` prints nothing to disk.
    pub json_out: Option<PathBuf>,
    /// Print the interpolated grid as text on stdout.
    pub print_grid: bool,
    /// Record and export every neighbour read and cell write.
    pub include_trace: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_out: None,
            print_grid: true,
            include_trace: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HeightfieldConfig {
    /// Explicit side length. Takes precedence over `levels`.
    pub size: Option<usize>,
    /// Refinement depth; the side length is `2^levels + 1`.
    pub levels: u32,
    pub corners: Corners,
    pub output: OutputConfig,
}

impl Default for HeightfieldConfig {
    fn default() -> Self {
        Self {
            size: None,
            levels: 3,
            corners: Corners::default(),
            output: OutputConfig::default(),
        }
    }
}

impl HeightfieldConfig {
    /// Side length requested by this configuration.
    pub fn grid_size(&self) -> Result<usize, String> {
        match self.size {
            Some(size) => Ok(size),
            None => size_for_levels(self.levels)
                .ok_or_else(|| format!("levels={} overflows the grid size", self.levels)),
        }
    }

    /// Allocate the seeded grid described by this configuration.
    pub fn build_grid(&self) -> Result<HeightGrid, String> {
        let size = self.grid_size()?;
        HeightGrid::with_corners(size, self.corners).map_err(|e| e.to_string())
    }
}

pub fn load_config(path: &Path) -> Result<HeightfieldConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<HeightfieldConfig, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Resolve the configuration from command-line arguments.
///
/// Accepts an optional config path followed by overrides:
/// `[config.json] [--size N] [--levels N] [--corners NW,NE,SW,SE] [--json PATH] [--trace] [--quiet]`.
pub fn parse_cli<I>(program: &str, args: I) -> Result<HeightfieldConfig, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let mut config = match args.peek() {
        Some(first) if !first.starts_with("--") => {
            let path = args.next().unwrap_or_default();
            load_config(Path::new(&path))?
        }
        _ => HeightfieldConfig::default(),
    };

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--size" => {
                let value = expect_value(program, &flag, args.next())?;
                config.size = Some(parse_number(&flag, &value)?);
            }
            "--levels" => {
                let value = expect_value(program, &flag, args.next())?;
                config.levels = parse_number(&flag, &value)?;
                config.size = None;
            }
            "--corners" => {
                let value = expect_value(program, &flag, args.next())?;
                config.corners = parse_corners(&value)?;
            }
            "--json" => {
                let value = expect_value(program, &flag, args.next())?;
                config.output.json_out = Some(PathBuf::from(value));
            }
            "--trace" => config.output.include_trace = true,
            "--quiet" => config.output.print_grid = false,
            "-h" | "--help" => return Err(usage(program)),
            other => return Err(format!("Unknown argument '{other}'\n{}", usage(program))),
        }
    }
    Ok(config)
}

/// Parse `NW,NE,SW,SE` into [`Corners`].
pub fn parse_corners(value: &str) -> Result<Corners, String> {
    let parts: Vec<u8> = value
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<u8>()
                .map_err(|e| format!("Invalid corner value '{p}': {e}"))
        })
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        &[nw, ne, sw, se] => Ok(Corners::new(nw, ne, sw, se)),
        _ => Err(format!(
            "Expected four comma-separated corners (NW,NE,SW,SE), got {}",
            parts.len()
        )),
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [config.json] [--size N] [--levels N] \
         [--corners NW,NE,SW,SE] [--json PATH] [--trace] [--quiet]"
    )
}

fn expect_value(program: &str, flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("Missing value for {flag}\n{}", usage(program)))
}

fn parse_number<T>(flag: &str, value: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| format!("Invalid value '{value}' for {flag}: {e}"))
}
