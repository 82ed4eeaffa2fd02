/// Errors raised when building a raster from raw parts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("invalid raster buffer length (expected {expected} samples, got {got})")]
    DataLength { expected: usize, got: usize },

    #[error("raster dimensions overflow (rows={rows}, cols={cols})")]
    Dimensions { rows: usize, cols: usize },
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, RasterError> {
    rows.checked_mul(cols)
        .ok_or(RasterError::Dimensions { rows, cols })
}

/// Borrowed row-major raster.
#[derive(Clone, Copy, Debug)]
pub struct RasterView<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T], // row-major, len = rows*cols
}

impl<'a, T> RasterView<'a, T> {
    /// Wrap a row-major slice, checking that its length matches `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: &'a [T]) -> Result<Self, RasterError> {
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(RasterError::DataLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> &'a T {
        &self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &'a [T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn to_owned_raster(&self) -> Raster<T>
    where
        T: Clone,
    {
        Raster {
            rows: self.rows,
            cols: self.cols,
            data: self.data.to_vec(),
        }
    }
}

/// Owned row-major raster.
///
/// Cells are addressed as `(row, col)`; the storage is a single `Vec<T>` of
/// length `rows * cols`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Raster<T> {
    /// Raster of the given shape with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// Mirror the columns (left ⇄ right).
    pub fn flipped_horizontal(&self) -> Self {
        Self::from_fn(self.rows, self.cols, |row, col| {
            self.at(row, self.cols - 1 - col).clone()
        })
    }

    /// Mirror the rows (top ⇄ bottom).
    pub fn flipped_vertical(&self) -> Self {
        Self::from_fn(self.rows, self.cols, |row, col| {
            self.at(self.rows - 1 - row, col).clone()
        })
    }
}

impl<T> Raster<T> {
    /// Take ownership of a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, RasterError> {
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(RasterError::DataLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a raster by evaluating `f(row, col)` in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }

    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    /// Bounds-checked access; `None` outside the raster.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterate rows top to bottom. Yields nothing for a raster without columns.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn view(&self) -> RasterView<'_, T> {
        RasterView {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
    }

    /// Same-shape raster with a different element type.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Raster<U> {
        Raster {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Raster::from_vec(2, 3, vec![0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            RasterError::DataLength {
                expected: 6,
                got: 5
            }
        );
        assert!(RasterView::new(usize::MAX, 2, &[0u8; 4]).is_err());
    }

    #[test]
    fn indexing_is_row_major() {
        let r = Raster::from_fn(2, 3, |row, col| row * 10 + col);
        assert_eq!(r.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(*r.at(1, 2), 12);
        assert_eq!(r.row(1), &[10, 11, 12]);
        assert_eq!(r.get(2, 0), None);
        assert_eq!(r.get(0, 3), None);
        assert_eq!(r.iter_rows().count(), 2);
    }

    #[test]
    fn flips_mirror_axes() {
        let r = Raster::from_fn(2, 3, |row, col| row * 10 + col);
        assert_eq!(r.flipped_horizontal().as_slice(), &[2, 1, 0, 12, 11, 10]);
        assert_eq!(r.flipped_vertical().as_slice(), &[10, 11, 12, 0, 1, 2]);
        assert_eq!(r.flipped_vertical().flipped_vertical(), r);
    }

    #[test]
    fn map_keeps_shape() {
        let r = Raster::new(3, 2, 1u8);
        let m = r.map(|&v| Some(v as i32 * 2));
        assert_eq!((m.rows(), m.cols()), (3, 2));
        assert!(m.as_slice().iter().all(|v| *v == Some(2)));
    }

    #[test]
    fn empty_raster_has_no_rows() {
        let r: Raster<f32> = Raster::new(0, 4, 0.0);
        assert!(r.is_empty());
        assert_eq!(r.iter_rows().count(), 0);
        let v = r.view();
        assert!(v.is_empty());
    }
}
