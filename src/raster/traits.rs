/// Read access to a row-major raster of samples.
pub trait RasterView {
    type Sample: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Sample];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { raster: self, y: 0 }
    }

    fn as_slice(&self) -> Option<&[Self::Sample]> {
        None
    }
}

pub trait RasterViewMut: RasterView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Sample];
}

pub struct Rows<'a, R: ?Sized + RasterView> {
    raster: &'a R,
    y: usize,
}

impl<'a, R: RasterView> Iterator for Rows<'a, R> {
    type Item = &'a [R::Sample];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.raster.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.raster.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.raster.height().saturating_sub(self.y);
        (left, Some(left))
    }
}

impl<R: RasterView> ExactSizeIterator for Rows<'_, R> {}
