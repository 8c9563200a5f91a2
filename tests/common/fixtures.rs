use diamond_square::raster::RasterView;
use diamond_square::{Corners, HeightGrid};

/// 3x3 grid seeded NW=14, NE=64, SW=64, SE=110.
pub const CORNERS_3X3: Corners = Corners::new(14, 64, 64, 110);

/// 5x5 grid seeded NW=14, NE=64, SW=204, SE=110.
pub const CORNERS_5X5: Corners = Corners::new(14, 64, 204, 110);

/// Fully interpolated 5x5 reference field for `CORNERS_5X5`.
pub const REFERENCE_5X5: [[u8; 5]; 5] = [
    [14, 46, 58, 66, 64],
    [62, 68, 75, 77, 77],
    [105, 101, 98, 93, 90],
    [148, 136, 119, 108, 102],
    [204, 159, 137, 118, 110],
];

/// Collect a grid into nested rows for readable assertions.
pub fn rows(grid: &HeightGrid) -> Vec<Vec<u8>> {
    grid.rows().map(|r| r.to_vec()).collect()
}

/// Pseudo-random but reproducible corner seeds.
pub fn seeded_corners(seed: u32) -> Corners {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 24) as u8
    };
    Corners::new(next(), next(), next(), next())
}
