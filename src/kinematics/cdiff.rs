//! Centered finite differences, GrADS `cdiff()` semantics
//!
//! Only interior cells are computed. The outermost row and column on every side
//! stay NaN regardless of the differencing axis; there is no one-sided
//! differencing at the edges.

use crate::errors::{GradsError, Result};
use crate::grid::DiffAxis;
use ndarray::{s, Array2, ArrayBase, ArrayView2, Data, Dimension, Ix2, Zip};

/// Centered difference of a 2-D field along `axis`.
///
/// Interior cells hold `f[i+1, j] - f[i-1, j]` ([`DiffAxis::Lat`]) or
/// `f[i, j+1] - f[i, j-1]` ([`DiffAxis::Lon`]); the difference is not divided
/// by the grid spacing.
///
/// # Errors
///
/// Returns [`GradsError::ShapeError`] if `field` is not exactly 2-D.
pub fn centered_difference<S, D>(field: &ArrayBase<S, D>, axis: DiffAxis) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let field = as_field(field)?;
    let (rows, cols) = field.dim();
    let mut out = Array2::from_elem((rows, cols), f64::NAN);

    // No interior cells
    if rows < 3 || cols < 3 {
        return Ok(out);
    }

    let (ahead, behind) = match axis {
        DiffAxis::Lat => (
            field.slice(s![2.., 1..cols - 1]),
            field.slice(s![..rows - 2, 1..cols - 1]),
        ),
        DiffAxis::Lon => (
            field.slice(s![1..rows - 1, 2..]),
            field.slice(s![1..rows - 1, ..cols - 2]),
        ),
    };

    Zip::from(out.slice_mut(s![1..rows - 1, 1..cols - 1]))
        .and(&ahead)
        .and(&behind)
        .for_each(|o, &a, &b| *o = a - b);

    Ok(out)
}

/// Same as [`centered_difference`] with a raw `0`/`1` axis selector.
///
/// # Errors
///
/// [`GradsError::ShapeError`] for non 2-D input, then
/// [`GradsError::AxisError`] for a selector other than 0 or 1.
pub fn centered_difference_index<S, D>(field: &ArrayBase<S, D>, axis: usize) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    as_field(field)?;
    centered_difference(field, DiffAxis::try_from(axis)?)
}

fn as_field<S, D>(field: &ArrayBase<S, D>) -> Result<ArrayView2<'_, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = field.ndim();
    field
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| GradsError::ShapeError { ndim })
}

/// Trait for arrays that can be centered-differenced in place of a call to
/// [`centered_difference`]
pub trait CenteredDifference {
    /// # Errors
    ///
    /// Returns [`GradsError::ShapeError`] if the array is not 2-D.
    fn cdiff(&self, axis: DiffAxis) -> Result<Array2<f64>>;
}

impl<S, D> CenteredDifference for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn cdiff(&self, axis: DiffAxis) -> Result<Array2<f64>> {
        centered_difference(self, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1, Array3};

    #[test]
    fn lon_difference_of_ramp() {
        let field = array![
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0]
        ];
        let out = centered_difference(&field, DiffAxis::Lon).unwrap();

        assert_eq!(out.dim(), (4, 4));
        for i in 1..3 {
            assert_eq!(out[[i, 1]], 2.0);
            assert_eq!(out[[i, 2]], 2.0);
        }
    }

    #[test]
    fn lat_difference_matches_stencil() {
        let field = Array2::from_shape_fn((5, 4), |(i, j)| (i * i) as f64 + 10.0 * j as f64);
        let out = field.cdiff(DiffAxis::Lat).unwrap();

        for i in 1..4 {
            for j in 1..3 {
                assert_eq!(out[[i, j]], field[[i + 1, j]] - field[[i - 1, j]]);
            }
        }
    }

    #[test]
    fn borders_are_nan_for_both_axes() {
        let field = Array2::from_shape_fn((4, 5), |(i, j)| (i + 2 * j) as f64);
        for axis in [DiffAxis::Lat, DiffAxis::Lon] {
            let out = field.cdiff(axis).unwrap();
            for j in 0..5 {
                assert!(out[[0, j]].is_nan());
                assert!(out[[3, j]].is_nan());
            }
            for i in 0..4 {
                assert!(out[[i, 0]].is_nan());
                assert!(out[[i, 4]].is_nan());
            }
        }
    }

    #[test]
    fn small_fields_have_no_interior() {
        let field = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let out = field.cdiff(DiffAxis::Lon).unwrap();
        assert_eq!(out.dim(), (2, 3));
        assert!(out.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn rejects_non_2d_input() {
        let line = Array1::<f64>::zeros(5);
        match centered_difference(&line, DiffAxis::Lat) {
            Err(GradsError::ShapeError { ndim }) => assert_eq!(ndim, 1),
            other => panic!("Expected ShapeError, got {:?}", other),
        }

        let cube = Array3::<f64>::zeros((3, 3, 3));
        match cube.cdiff(DiffAxis::Lon) {
            Err(GradsError::ShapeError { ndim }) => assert_eq!(ndim, 3),
            other => panic!("Expected ShapeError, got {:?}", other),
        }
    }

    #[test]
    fn raw_selector_validation() {
        let field = Array2::<f64>::ones((3, 3));
        assert!(centered_difference_index(&field, 1).is_ok());
        match centered_difference_index(&field, 2) {
            Err(GradsError::AxisError { axis }) => assert_eq!(axis, 2),
            other => panic!("Expected AxisError, got {:?}", other),
        }

        // Shape is checked before the selector
        let cube = Array3::<f64>::zeros((3, 3, 3));
        assert!(matches!(
            centered_difference_index(&cube, 7),
            Err(GradsError::ShapeError { ndim: 3 })
        ));
    }

    #[test]
    fn input_is_left_untouched() {
        let field = Array2::from_shape_fn((3, 3), |(i, j)| (i * 3 + j) as f64);
        let before = field.clone();
        let _ = field.cdiff(DiffAxis::Lat).unwrap();
        assert_eq!(field, before);
    }
}
