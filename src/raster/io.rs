//! Output helpers for height fields and JSON reports.
//!
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `grid_rows`: copy a raster into nested rows for serialization.
//! - `format_rows`: render a raster as right-aligned text, one row per line.
use super::RasterView;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Copy every row of `raster` into an owned `Vec<Vec<_>>`.
pub fn grid_rows<R>(raster: &R) -> Vec<Vec<R::Sample>>
where
    R: RasterView,
{
    raster.rows().map(|row| row.to_vec()).collect()
}

/// Render an 8-bit raster as text with three-character columns.
pub fn format_rows<R>(raster: &R) -> String
where
    R: RasterView<Sample = u8>,
{
    let mut out = String::with_capacity(raster.width() * raster.height() * 4);
    for row in raster.rows() {
        for (x, v) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            write!(out, "{v:>3}").ok();
        }
        out.push('\n');
    }
    out
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
