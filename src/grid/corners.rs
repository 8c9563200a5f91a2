use serde::{Deserialize, Serialize};

/// Four seed samples anchoring the interpolation, one per grid corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corners {
    /// Written to `(0, 0)`.
    pub nw: u8,
    /// Written to `(0, max_dim)`.
    pub ne: u8,
    /// Written to `(max_dim, 0)`.
    pub sw: u8,
    /// Written to `(max_dim, max_dim)`.
    pub se: u8,
}

impl Corners {
    pub const fn new(nw: u8, ne: u8, sw: u8, se: u8) -> Self {
        Self { nw, ne, sw, se }
    }

    pub const fn uniform(value: u8) -> Self {
        Self::new(value, value, value, value)
    }

    /// Corner positions paired with their seed, in NW, NE, SW, SE order.
    pub fn placed(&self, max_dim: usize) -> [((usize, usize), u8); 4] {
        [
            ((0, 0), self.nw),
            ((0, max_dim), self.ne),
            ((max_dim, 0), self.sw),
            ((max_dim, max_dim), self.se),
        ]
    }
}
