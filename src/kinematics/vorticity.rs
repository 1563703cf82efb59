//! Relative vorticity (GrADS `hcurl`)

use super::cdiff::CenteredDifference;
use crate::errors::Result;
use crate::grid::{check_axes, check_field, CoordinateMesh, DiffAxis, EARTH_RADIUS};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Computes the vertical component of the relative vorticity, `dv/dx - du/dy`.
///
/// Same grid conventions and degeneracies as
/// [`horizontal_divergence`](super::horizontal_divergence).
///
/// # Errors
///
/// [`GradsError::ShapeMismatch`](crate::GradsError::ShapeMismatch) when `v` or
/// the axes do not line up with `u`.
pub fn relative_vorticity(
    u: ArrayView2<'_, f64>,
    v: ArrayView2<'_, f64>,
    lat: ArrayView1<'_, f64>,
    lon: ArrayView1<'_, f64>,
) -> Result<Array2<f64>> {
    check_field("v", u.dim(), v.dim())?;
    check_axes(u.dim(), lat, lon)?;

    let mesh = CoordinateMesh::new(lat, lon);
    let cos_lat = mesh.cos_lat();

    let dvdx = v.cdiff(DiffAxis::Lon)? / mesh.lon_radians().cdiff(DiffAxis::Lon)?;
    let dudy = (&u * &cos_lat).cdiff(DiffAxis::Lat)? / mesh.lat_radians().cdiff(DiffAxis::Lat)?;

    Ok((dvdx - dudy) / (cos_lat * EARTH_RADIUS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DEG_TO_RAD;
    use ndarray::array;

    #[test]
    fn calm_wind_has_zero_vorticity() {
        let lat = array![10.0, 20.0, 30.0, 40.0];
        let lon = array![0.0, 5.0, 10.0, 15.0, 20.0];
        let calm = Array2::<f64>::zeros((4, 5));

        let out = relative_vorticity(calm.view(), calm.view(), lat.view(), lon.view()).unwrap();

        for i in 1..3 {
            for j in 1..4 {
                assert_eq!(out[[i, j]], 0.0);
            }
        }
    }

    #[test]
    fn meridional_wind_shear_gives_positive_vorticity() {
        // v increases eastward: counter-clockwise rotation
        let lat = array![-1.0, 0.0, 1.0];
        let lon = array![0.0, 1.0, 2.0];
        let u = Array2::<f64>::zeros((3, 3));
        let v = Array2::from_shape_fn((3, 3), |(_, j)| 3.0 * j as f64);

        let out = relative_vorticity(u.view(), v.view(), lat.view(), lon.view()).unwrap();
        let expected = (6.0 / (2.0 * DEG_TO_RAD)) / EARTH_RADIUS;
        assert!(out[[1, 1]] > 0.0);
        assert!((out[[1, 1]] - expected).abs() < 1e-15);
    }

    #[test]
    fn axis_length_must_match() {
        let lat = array![0.0, 1.0];
        let lon = array![0.0, 1.0, 2.0];
        let u = Array2::<f64>::zeros((3, 3));
        assert!(relative_vorticity(u.view(), u.view(), lat.view(), lon.view()).is_err());
    }
}
