//! Sequential Euclidean distance mapping (4SED / 8SED).
//!
//! Instead of scalar distances, every cell carries the displacement (absolute
//! column and row offsets) to the closest background pixel found so far.
//! Small masks of already-visited neighbours are swept over the raster in
//! both horizontal directions on every row, first top to bottom, then bottom
//! to top. A candidate `neighbour + |offset|` replaces the current
//! displacement only when its squared length is strictly smaller.
//!
//! The result is exact for a single background pixel; in general it is an
//! upper bound of the Euclidean distance that may exceed it by a fraction of
//! a pixel.

use crate::{DistanceTransformError, Neighborhood};
use distance_transform_core::{Raster, RasterView, Sample};
use nalgebra::Vector2;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// `(|d_col|, |d_row|)` to the closest known background pixel.
pub(crate) type Displacement = Vector2<i32>;

/// `None` while no background pixel has reached the cell.
pub(crate) type DisplacementField = Raster<Option<Displacement>>;

/// Relative `(d_row, d_col)` offsets of already-visited neighbours.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SedMask {
    offsets: &'static [(isize, isize)],
}

// 4SED masks
const LEFT: SedMask = SedMask {
    offsets: &[(0, -1)],
};
const UP: SedMask = SedMask {
    offsets: &[(-1, 0)],
};
const UP_LEFT: SedMask = SedMask {
    offsets: &[(-1, 0), (0, -1)],
};
const RIGHT: SedMask = SedMask { offsets: &[(0, 1)] };
const DOWN: SedMask = SedMask { offsets: &[(1, 0)] };
const RIGHT_DOWN: SedMask = SedMask {
    offsets: &[(0, 1), (1, 0)],
};

// 8SED masks; `o` marks the filtered cell, `x` the neighbours it reads
const XO: SedMask = LEFT;
const OX: SedMask = RIGHT;
const XXXXO: SedMask = SedMask {
    offsets: &[(-1, -1), (-1, 0), (-1, 1), (0, -1)],
};
const XXXO: SedMask = SedMask {
    offsets: &[(-1, -1), (-1, 0), (0, -1)],
};
const XXO: SedMask = SedMask {
    offsets: &[(-1, 0), (-1, 1)],
};
const OXXXX: SedMask = SedMask {
    offsets: &[(0, 1), (1, -1), (1, 0), (1, 1)],
};
const OXXX: SedMask = SedMask {
    offsets: &[(0, 1), (1, 0), (1, 1)],
};
const OXX: SedMask = SedMask {
    offsets: &[(1, -1), (1, 0)],
};

#[inline]
fn length_sqr(d: &Displacement) -> i64 {
    let x = d.x as i64;
    let y = d.y as i64;
    x * x + y * y
}

/// Keep `shortest` unless `other` is known and strictly shorter.
#[inline]
fn closer(shortest: Option<Displacement>, other: Option<Displacement>) -> Option<Displacement> {
    match (shortest, other) {
        (_, None) => shortest,
        (None, Some(_)) => other,
        (Some(s), Some(o)) if length_sqr(&s) > length_sqr(&o) => other,
        _ => shortest,
    }
}

impl SedMask {
    /// Refine the displacement at `(row, col)` from the mask neighbours.
    pub(crate) fn filter(&self, dist: &mut DisplacementField, row: usize, col: usize) {
        let mut shortest = None;
        for &(dr, dc) in self.offsets {
            let r = row.wrapping_add_signed(dr);
            let c = col.wrapping_add_signed(dc);
            let step = Vector2::new(dc.unsigned_abs() as i32, dr.unsigned_abs() as i32);
            let candidate = dist.at(r, c).map(|d| d + step);
            shortest = closer(shortest, candidate);
        }
        shortest = closer(shortest, *dist.at(row, col));
        if shortest.is_some() {
            *dist.at_mut(row, col) = shortest;
        }
    }
}

/// Seed background cells with a zero displacement, everything else unknown.
pub(crate) fn seed<T: Sample>(src: &RasterView<'_, T>) -> DisplacementField {
    Raster::from_fn(src.rows(), src.cols(), |r, c| {
        src.at(r, c).is_background().then(Displacement::zeros)
    })
}

fn four_sed(dist: &mut DisplacementField) {
    let (rows, cols) = (dist.rows(), dist.cols());

    // top row
    for col in 1..cols {
        LEFT.filter(dist, 0, col);
    }
    for col in (0..cols - 1).rev() {
        RIGHT.filter(dist, 0, col);
    }
    for row in 1..rows {
        UP.filter(dist, row, 0);
        for col in 1..cols {
            UP_LEFT.filter(dist, row, col);
        }
        for col in (0..cols - 1).rev() {
            RIGHT.filter(dist, row, col);
        }
    }

    // bottom row, then upwards
    let last = rows - 1;
    for col in (0..cols - 1).rev() {
        RIGHT.filter(dist, last, col);
    }
    for col in 1..cols {
        LEFT.filter(dist, last, col);
    }
    for row in (0..rows - 1).rev() {
        DOWN.filter(dist, row, cols - 1);
        for col in (0..cols - 1).rev() {
            RIGHT_DOWN.filter(dist, row, col);
        }
        for col in 1..cols {
            LEFT.filter(dist, row, col);
        }
    }
}

fn eight_sed(dist: &mut DisplacementField) {
    let (rows, cols) = (dist.rows(), dist.cols());

    // top row
    for col in 1..cols {
        XO.filter(dist, 0, col);
    }
    for col in (0..cols - 1).rev() {
        OX.filter(dist, 0, col);
    }
    for row in 1..rows {
        XXO.filter(dist, row, 0);
        for col in 1..cols - 1 {
            XXXXO.filter(dist, row, col);
        }
        XXXO.filter(dist, row, cols - 1);
        for col in (0..cols - 1).rev() {
            OX.filter(dist, row, col);
        }
    }

    // bottom row, then upwards
    let last = rows - 1;
    for col in (0..cols - 1).rev() {
        OX.filter(dist, last, col);
    }
    for col in 1..cols {
        XO.filter(dist, last, col);
    }
    for row in (0..rows - 1).rev() {
        OXX.filter(dist, row, cols - 1);
        for col in (1..cols - 1).rev() {
            OXXXX.filter(dist, row, col);
        }
        OXXX.filter(dist, row, 0);
        for col in 1..cols - 1 {
            XO.filter(dist, row, col);
        }
    }
}

/// Run the SED sweeps over a seeded displacement field.
///
/// Requires `rows >= 2` and `cols >= 2`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(dist), fields(rows = dist.rows(), cols = dist.cols()))
)]
pub(crate) fn propagate(dist: &mut DisplacementField, neighborhood: Neighborhood) {
    match neighborhood {
        Neighborhood::Four => four_sed(dist),
        Neighborhood::Eight => eight_sed(dist),
    }
    log::trace!("sed {neighborhood:?}: sweeps done");
}

/// Squared length of every displacement.
///
/// Fails on the first cell that no background pixel has reached.
pub(crate) fn squared_lengths(
    dist: &DisplacementField,
) -> Result<Raster<i64>, DistanceTransformError> {
    let mut out = Raster::new(dist.rows(), dist.cols(), 0i64);
    for row in 0..dist.rows() {
        for (col, d) in dist.row(row).iter().enumerate() {
            let d = d.ok_or(DistanceTransformError::UnresolvedCell { row, col })?;
            *out.at_mut(row, col) = length_sqr(&d);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sed(src: &Raster<u8>, neighborhood: Neighborhood) -> Raster<i64> {
        let mut dist = seed(&src.view());
        propagate(&mut dist, neighborhood);
        squared_lengths(&dist).expect("every cell resolved")
    }

    #[test]
    fn closer_prefers_known_and_strictly_shorter() {
        let a = Some(Vector2::new(1, 2));
        let b = Some(Vector2::new(2, 1));
        assert_eq!(closer(None, a), a);
        assert_eq!(closer(a, None), a);
        // ties keep the current value
        assert_eq!(closer(a, b), a);
        assert_eq!(closer(Some(Vector2::new(3, 0)), b), b);
    }

    #[test]
    fn filter_adds_absolute_offsets() {
        let mut dist: DisplacementField = Raster::new(2, 2, None);
        *dist.at_mut(0, 0) = Some(Vector2::new(1, 1));
        *dist.at_mut(0, 1) = Some(Vector2::new(0, 3));
        XXXO.filter(&mut dist, 1, 1);
        // (0,0) -> (2,2) len 8 ; (0,1) -> (0,4) len 16 ; (1,0) unknown
        assert_eq!(*dist.at(1, 1), Some(Vector2::new(2, 2)));
    }

    #[test]
    fn unknown_neighbours_leave_cell_unknown() {
        let mut dist: DisplacementField = Raster::new(2, 2, None);
        XXXO.filter(&mut dist, 1, 1);
        assert_eq!(*dist.at(1, 1), None);
    }

    #[test]
    fn single_seed_is_exact() {
        for (sr, sc) in [(0, 0), (2, 3), (4, 1), (3, 5)] {
            let src = Raster::from_fn(5, 6, |r, c| u8::from((r, c) != (sr, sc)));
            for n in [Neighborhood::Four, Neighborhood::Eight] {
                let out = sed(&src, n);
                for r in 0..5 {
                    for c in 0..6 {
                        let dr = r as i64 - sr as i64;
                        let dc = c as i64 - sc as i64;
                        assert_eq!(*out.at(r, c), dr * dr + dc * dc, "{n:?} ({r},{c})");
                    }
                }
            }
        }
    }

    #[test]
    fn minimal_raster_resolves_every_cell() {
        let src = Raster::from_vec(2, 2, vec![1u8, 1, 1, 0]).expect("raster");
        for n in [Neighborhood::Four, Neighborhood::Eight] {
            let out = sed(&src, n);
            assert_eq!(out.as_slice(), &[2, 1, 1, 0]);
        }
    }

    #[test]
    fn leftover_unknown_cell_is_reported() {
        let mut dist: DisplacementField = Raster::new(2, 2, Some(Vector2::zeros()));
        *dist.at_mut(1, 0) = None;
        assert_eq!(
            squared_lengths(&dist),
            Err(DistanceTransformError::UnresolvedCell { row: 1, col: 0 })
        );
    }
}
