/// Borrowed, read-only view of a square 8-bit height field.
///
/// Obtained from [`HeightGrid::as_view`](crate::grid::HeightGrid::as_view).
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    pub(crate) size: usize,
    pub(crate) data: &'a [u8],
}

impl<'a> GridView<'a> {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.size + col]
    }
}

impl<'a> crate::raster::traits::RasterView for GridView<'a> {
    type Sample = u8;

    #[inline]
    fn width(&self) -> usize {
        self.size
    }
    #[inline]
    fn height(&self) -> usize {
        self.size
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.size;
        &self.data[start..start + self.size]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data[..self.size * self.size])
    }
}
