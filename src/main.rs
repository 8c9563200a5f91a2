use diamond_square::raster::io::format_rows;
use diamond_square::{Corners, HeightGrid, Interpolator};

fn main() {
    // Demo stub: seeds a 5x5 grid and prints the interpolated field
    let corners = Corners::new(14, 64, 204, 110);
    let mut grid = match HeightGrid::with_corners(5, corners) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    Interpolator::new().interpolate(&mut grid);
    print!("{}", format_rows(&grid));
}
