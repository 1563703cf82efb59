//! Horizontal advection of a scalar (GrADS `hadv`)

use super::cdiff::CenteredDifference;
use crate::errors::Result;
use crate::grid::{check_axes, check_field, CoordinateMesh, DiffAxis, DEG_TO_RAD, EARTH_RADIUS};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Computes `-(u dt/dx + v dt/dy)` for a scalar `t` carried by the wind.
///
/// Coordinate spacing is differenced in degrees and converted afterwards,
/// which keeps results bit-identical to GrADS. Positive values mean the
/// scalar increases locally (warm advection for temperature).
///
/// # Errors
///
/// [`GradsError::ShapeMismatch`](crate::GradsError::ShapeMismatch) when `v`,
/// `t` or the axes do not line up with `u`.
pub fn horizontal_advection(
    u: ArrayView2<'_, f64>,
    v: ArrayView2<'_, f64>,
    t: ArrayView2<'_, f64>,
    lat: ArrayView1<'_, f64>,
    lon: ArrayView1<'_, f64>,
) -> Result<Array2<f64>> {
    check_field("v", u.dim(), v.dim())?;
    check_field("t", u.dim(), t.dim())?;
    check_axes(u.dim(), lat, lon)?;

    let mesh = CoordinateMesh::new(lat, lon);

    let dtx = t.cdiff(DiffAxis::Lon)?;
    let dty = t.cdiff(DiffAxis::Lat)?;
    let dx = mesh.lon.cdiff(DiffAxis::Lon)? * DEG_TO_RAD;
    let dy = mesh.lat.cdiff(DiffAxis::Lat)? * DEG_TO_RAD;

    let zonal = (&u * &dtx) / (mesh.cos_lat() * &dx);
    let meridional = &v * &dty / &dy;

    Ok(-(zonal + meridional) / EARTH_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradsError;
    use ndarray::array;

    #[test]
    fn uniform_scalar_is_not_advected() {
        let lat = array![30.0, 35.0, 40.0, 45.0];
        let lon = array![200.0, 205.0, 210.0, 215.0];
        let u = Array2::from_elem((4, 4), 12.0);
        let v = Array2::from_elem((4, 4), -4.0);
        let t = Array2::from_elem((4, 4), 288.15);

        let out = horizontal_advection(u.view(), v.view(), t.view(), lat.view(), lon.view()).unwrap();

        for i in 1..3 {
            for j in 1..3 {
                assert_eq!(out[[i, j]], 0.0);
            }
        }
        assert!(out[[0, 0]].is_nan());
        assert!(out[[3, 2]].is_nan());
    }

    #[test]
    fn westerly_over_eastward_warming_cools() {
        // Temperature rises eastward, wind blows from the west: cold advection
        let lat = array![-1.0, 0.0, 1.0];
        let lon = array![0.0, 1.0, 2.0];
        let u = Array2::from_elem((3, 3), 10.0);
        let v = Array2::<f64>::zeros((3, 3));
        let t = Array2::from_shape_fn((3, 3), |(_, j)| 280.0 + j as f64);

        let out = horizontal_advection(u.view(), v.view(), t.view(), lat.view(), lon.view()).unwrap();
        let expected = -(10.0 * 2.0 / (2.0 * DEG_TO_RAD)) / EARTH_RADIUS;
        assert!(out[[1, 1]] < 0.0);
        assert!((out[[1, 1]] - expected).abs() < 1e-15);
    }

    #[test]
    fn scalar_shape_is_checked() {
        let lat = array![0.0, 1.0, 2.0];
        let lon = array![0.0, 1.0, 2.0];
        let u = Array2::<f64>::zeros((3, 3));
        let t = Array2::<f64>::zeros((2, 3));

        match horizontal_advection(u.view(), u.view(), t.view(), lat.view(), lon.view()) {
            Err(GradsError::ShapeMismatch { name, .. }) => assert_eq!(name, "t"),
            other => panic!("Expected ShapeMismatch, got {:?}", other),
        }
    }
}
