//! Exact squared Euclidean distance transform.
//!
//! Linear-time algorithm of Maurer, Qi and Raghavan ("A Linear Time Algorithm
//! for Computing Exact Euclidean Distance Transforms of Binary Images in
//! Arbitrary Dimensions", IEEE TPAMI 25(2), 2003):
//!
//! 1. [`edt_rows`]: per row, the squared distance to the closest background
//!    pixel of the same row (or [`UNDEFINED`] if the row has none).
//! 2. [`edt_columns`]: per column, the lower envelope of the parabolas
//!    `g + (y - h)^2` seeded by step 1, which yields the exact squared
//!    distance to the closest background pixel anywhere.
//!
//! All arithmetic is integer (`i64`), so the result is exact.

use distance_transform_core::{Raster, RasterView, Sample};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Marks a cell whose row holds no background pixel.
pub(crate) const UNDEFINED: i64 = -1;

/// Row pass. Background cells become `0`, foreground cells the squared
/// horizontal distance to the closest background pixel of their row.
pub(crate) fn edt_rows<T: Sample>(src: &RasterView<'_, T>) -> Raster<i64> {
    let (rows, cols) = (src.rows(), src.cols());
    let mut field = Raster::new(rows, cols, UNDEFINED);

    for y in 0..rows {
        let input = src.row(y);
        let out = field.row_mut(y);

        // forward: closest background to the left
        let mut pos: Option<usize> = None;
        for (x, (&v, d)) in input.iter().zip(out.iter_mut()).enumerate() {
            if v.is_background() {
                pos = Some(x);
                *d = 0;
            } else if let Some(p) = pos {
                let dx = (x - p) as i64;
                *d = dx * dx;
            }
        }
        if pos.is_none() {
            continue;
        }

        // backward: closest background to the right
        let mut pos: Option<usize> = None;
        for x in (0..cols).rev() {
            if input[x].is_background() {
                pos = Some(x);
            } else if let Some(p) = pos {
                let dx = (p - x) as i64;
                let d2 = dx * dx;
                if out[x] == UNDEFINED || out[x] > d2 {
                    out[x] = d2;
                }
            }
        }
    }
    field
}

/// True when the parabola with vertex `(v, dv)` is hidden by its neighbours
/// `(u, du)` and `(w, dw)` on the whole column (`u < v < w`).
#[inline]
pub(crate) fn remove_edt(du: i64, dv: i64, dw: i64, u: i64, v: i64, w: i64) -> bool {
    let a = v - u;
    let b = w - v;
    let c = w - u;
    c * dv - b * du - a * dw > a * b * c
}

/// Complete one column in place. `g` and `h` are scratch buffers of length
/// `rows`; a column without any defined seed is left as it is.
pub(crate) fn voronoi_column(field: &mut Raster<i64>, col: usize, g: &mut [i64], h: &mut [i64]) {
    let rows = field.rows();

    // build: stack of surviving parabolas
    let mut n = 0usize;
    for row in 0..rows {
        let f = *field.at(row, col);
        if f < 0 {
            continue;
        }
        let r = row as i64;
        while n >= 2 && remove_edt(g[n - 2], g[n - 1], f, h[n - 2], h[n - 1], r) {
            n -= 1;
        }
        g[n] = f;
        h[n] = r;
        n += 1;
    }
    if n == 0 {
        return;
    }

    // query: walk the envelope forward only
    let mut l = 0usize;
    for row in 0..rows {
        let r = row as i64;
        let dy = h[l] - r;
        let mut best = g[l] + dy * dy;
        while l + 1 < n {
            let dy = h[l + 1] - r;
            let next = g[l + 1] + dy * dy;
            if best > next {
                l += 1;
                best = next;
            } else {
                break;
            }
        }
        *field.at_mut(row, col) = best;
    }
}

/// Column pass over the output of [`edt_rows`].
pub(crate) fn edt_columns(field: &mut Raster<i64>) {
    let rows = field.rows();
    let mut g = vec![0i64; rows];
    let mut h = vec![0i64; rows];
    for col in 0..field.cols() {
        voronoi_column(field, col, &mut g, &mut h);
    }
}

/// Exact squared Euclidean distance of every cell to its closest background
/// pixel. Cells stay [`UNDEFINED`] only if the raster has no background.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(src), fields(rows = src.rows(), cols = src.cols()))
)]
pub(crate) fn squared_edt<T: Sample>(src: &RasterView<'_, T>) -> Raster<i64> {
    let mut field = edt_rows(src);
    log::trace!("edt: row pass done");
    edt_columns(&mut field);
    log::trace!("edt: column pass done");
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(rows: usize, cols: usize, bg: &[(usize, usize)]) -> Raster<u8> {
        Raster::from_fn(rows, cols, |r, c| u8::from(!bg.contains(&(r, c))))
    }

    #[test]
    fn row_pass_takes_closest_side() {
        let src = Raster::from_vec(1, 7, vec![1u8, 0, 1, 1, 1, 0, 1]).expect("raster");
        let field = edt_rows(&src.view());
        assert_eq!(field.row(0), &[1, 0, 1, 4, 1, 0, 1]);
    }

    #[test]
    fn row_without_background_stays_undefined() {
        let src = binary(2, 4, &[(1, 0)]);
        let field = edt_rows(&src.view());
        assert_eq!(field.row(0), &[UNDEFINED; 4]);
        assert_eq!(field.row(1), &[0, 1, 4, 9]);
    }

    #[test]
    fn removal_test_discards_hidden_parabola() {
        // v sits between two seeds at distance 0 and is far from background.
        assert!(remove_edt(0, 100, 0, 0, 5, 10));
        // a v seed at 0 is never hidden
        assert!(!remove_edt(0, 0, 0, 0, 5, 10));
        // boundary: equality keeps the parabola
        assert!(!remove_edt(0, 25, 0, 0, 5, 10));
    }

    #[test]
    fn column_pass_ignores_undefined_rows() {
        let mut field = Raster::from_vec(4, 1, vec![UNDEFINED, 4, UNDEFINED, UNDEFINED])
            .expect("raster");
        edt_columns(&mut field);
        assert_eq!(field.as_slice(), &[5, 4, 5, 8]);
    }

    #[test]
    fn column_without_seed_is_left_alone() {
        let mut field = Raster::new(3, 2, UNDEFINED);
        edt_columns(&mut field);
        assert!(field.as_slice().iter().all(|&v| v == UNDEFINED));
    }

    #[test]
    fn matches_exhaustive_search() {
        let bg = [(0, 6), (3, 1), (4, 4), (6, 0)];
        let src = binary(7, 8, &bg);
        let field = squared_edt(&src.view());
        for r in 0..7 {
            for c in 0..8 {
                let expected = bg
                    .iter()
                    .map(|&(br, bc)| {
                        let dr = br as i64 - r as i64;
                        let dc = bc as i64 - c as i64;
                        dr * dr + dc * dc
                    })
                    .min()
                    .unwrap_or(UNDEFINED);
                assert_eq!(*field.at(r, c), expected, "cell ({r},{c})");
            }
        }
    }
}
