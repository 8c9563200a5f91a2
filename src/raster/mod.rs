pub mod io;
pub mod traits;
pub mod view;

pub use self::traits::{RasterView, RasterViewMut, Rows};
pub use self::view::GridView;
