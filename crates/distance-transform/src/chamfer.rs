//! Chamfer propagation for the 4- and 8-neighbourhood distances.
//!
//! Two raster sweeps (top-left to bottom-right, then back) relax every
//! foreground cell to `1 + min(neighbours)`. Before the sweeps every
//! foreground cell holds the sentinel `rows + cols`, an upper bound of any
//! city-block distance inside the raster. Background cells (`0`) are never
//! written.
//!
//! Border cells use their own hand-enumerated neighbour lists, selected by
//! [`Region`], so no sweep ever reads outside the raster.

use crate::Neighborhood;
use distance_transform_core::{Raster, RasterView, Sample};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// `(d_row, d_col)` relative neighbour offset.
type Offset = (isize, isize);

/// Position class of a cell, keyed to its neighbour table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Region {
    Interior,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Region {
    /// Classify `(row, col)`; requires `rows >= 2` and `cols >= 2`.
    pub(crate) fn of(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        let top = row == 0;
        let bottom = row + 1 == rows;
        let left = col == 0;
        let right = col + 1 == cols;
        match (top, bottom, left, right) {
            (true, _, true, _) => Region::TopLeft,
            (true, _, _, true) => Region::TopRight,
            (_, true, true, _) => Region::BottomLeft,
            (_, true, _, true) => Region::BottomRight,
            (true, ..) => Region::Top,
            (_, true, ..) => Region::Bottom,
            (_, _, true, _) => Region::Left,
            (_, _, _, true) => Region::Right,
            _ => Region::Interior,
        }
    }

    pub(crate) fn offsets(self, neighborhood: Neighborhood) -> &'static [Offset] {
        match neighborhood {
            Neighborhood::Four => self.offsets4(),
            Neighborhood::Eight => self.offsets8(),
        }
    }

    fn offsets4(self) -> &'static [Offset] {
        match self {
            Region::Interior => &[(0, 1), (1, 0), (0, -1), (-1, 0)],
            Region::Top => &[(0, 1), (1, 0), (0, -1)],
            Region::Bottom => &[(0, -1), (-1, 0), (0, 1)],
            Region::Left => &[(-1, 0), (0, 1), (1, 0)],
            Region::Right => &[(1, 0), (0, -1), (-1, 0)],
            Region::TopLeft => &[(0, 1), (1, 0)],
            Region::TopRight => &[(0, -1), (1, 0)],
            Region::BottomLeft => &[(0, 1), (-1, 0)],
            Region::BottomRight => &[(0, -1), (-1, 0)],
        }
    }

    fn offsets8(self) -> &'static [Offset] {
        match self {
            Region::Interior => &[
                (0, 1),
                (1, 1),
                (1, 0),
                (1, -1),
                (0, -1),
                (-1, -1),
                (-1, 0),
                (-1, 1),
            ],
            Region::Top => &[(0, 1), (1, 1), (1, 0), (1, -1), (0, -1)],
            Region::Bottom => &[(0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
            Region::Left => &[(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0)],
            Region::Right => &[(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0)],
            Region::TopLeft => &[(0, 1), (1, 1), (1, 0)],
            Region::TopRight => &[(0, -1), (1, -1), (1, 0)],
            Region::BottomLeft => &[(0, 1), (-1, 1), (-1, 0)],
            Region::BottomRight => &[(0, -1), (-1, -1), (-1, 0)],
        }
    }
}

/// Upper bound of any chamfer distance inside a `rows x cols` raster.
#[inline]
pub(crate) fn sentinel(rows: usize, cols: usize) -> f32 {
    (rows + cols) as f32
}

/// Cost field with background at `0` and every foreground cell saturated to
/// the sentinel.
pub(crate) fn seed<T: Sample>(src: &RasterView<'_, T>) -> Raster<f32> {
    let max = sentinel(src.rows(), src.cols());
    Raster::from_fn(src.rows(), src.cols(), |r, c| {
        if src.at(r, c).is_background() {
            0.0
        } else {
            max
        }
    })
}

#[inline]
fn relax(field: &mut Raster<f32>, row: usize, col: usize, offsets: &[Offset]) {
    if *field.at(row, col) == 0.0 {
        return;
    }
    let mut minimum = f32::INFINITY;
    for &(dr, dc) in offsets {
        let r = row.wrapping_add_signed(dr);
        let c = col.wrapping_add_signed(dc);
        minimum = minimum.min(*field.at(r, c));
    }
    *field.at_mut(row, col) = minimum + 1.0;
}

fn forward_pass(field: &mut Raster<f32>, neighborhood: Neighborhood) {
    let (rows, cols) = (field.rows(), field.cols());
    for row in 0..rows {
        for col in 0..cols {
            let offsets = Region::of(row, col, rows, cols).offsets(neighborhood);
            relax(field, row, col, offsets);
        }
    }
}

fn backward_pass(field: &mut Raster<f32>, neighborhood: Neighborhood) {
    let (rows, cols) = (field.rows(), field.cols());
    for row in (0..rows).rev() {
        for col in (0..cols).rev() {
            let offsets = Region::of(row, col, rows, cols).offsets(neighborhood);
            relax(field, row, col, offsets);
        }
    }
}

/// Run both sweeps over a field whose foreground already holds the sentinel.
///
/// Requires `rows >= 2` and `cols >= 2`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(field), fields(rows = field.rows(), cols = field.cols()))
)]
pub(crate) fn propagate(field: &mut Raster<f32>, neighborhood: Neighborhood) {
    forward_pass(field, neighborhood);
    log::trace!("chamfer {neighborhood:?}: forward sweep done");
    backward_pass(field, neighborhood);
    log::trace!("chamfer {neighborhood:?}: backward sweep done");
}
