//! Horizontal divergence (GrADS `hdivg`)

use super::cdiff::CenteredDifference;
use crate::errors::Result;
use crate::grid::{check_axes, check_field, CoordinateMesh, DiffAxis, EARTH_RADIUS};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Computes `du/dx + dv/dy` on the sphere.
///
/// `u` and `v` are indexed `[lat, lon]`; `lat` and `lon` are in degrees and
/// must match the two dimensions of `u`. Border cells are NaN. Rows where
/// cos(lat) vanishes or the latitude spacing is zero yield inf/NaN, as GrADS
/// does.
///
/// # Errors
///
/// [`GradsError::ShapeMismatch`](crate::GradsError::ShapeMismatch) when `v` or
/// the axes do not line up with `u`.
pub fn horizontal_divergence(
    u: ArrayView2<'_, f64>,
    v: ArrayView2<'_, f64>,
    lat: ArrayView1<'_, f64>,
    lon: ArrayView1<'_, f64>,
) -> Result<Array2<f64>> {
    check_field("v", u.dim(), v.dim())?;
    check_axes(u.dim(), lat, lon)?;

    let mesh = CoordinateMesh::new(lat, lon);
    let cos_lat = mesh.cos_lat();

    let dudx = u.cdiff(DiffAxis::Lon)? / mesh.lon_radians().cdiff(DiffAxis::Lon)?;
    let dvdy = (&v * &cos_lat).cdiff(DiffAxis::Lat)? / mesh.lat_radians().cdiff(DiffAxis::Lat)?;

    Ok((dudx + dvdy) / (cos_lat * EARTH_RADIUS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DEG_TO_RAD;
    use crate::GradsError;
    use ndarray::array;

    #[test]
    fn uniform_wind_has_zero_divergence() {
        let lat = array![-10.0, 0.0, 10.0];
        let lon = array![-10.0, 0.0, 10.0];
        let ones = Array2::<f64>::ones((3, 3));

        let out = horizontal_divergence(ones.view(), ones.view(), lat.view(), lon.view()).unwrap();

        assert_eq!(out[[1, 1]], 0.0);
        for (idx, value) in out.indexed_iter() {
            if idx != (1, 1) {
                assert!(value.is_nan(), "border cell {:?} should be NaN", idx);
            }
        }
    }

    #[test]
    fn zonal_shear_at_equator() {
        // u grows 1 m/s per degree of longitude, v = 0
        let lat = array![-1.0, 0.0, 1.0];
        let lon = array![0.0, 1.0, 2.0];
        let u = Array2::from_shape_fn((3, 3), |(_, j)| j as f64);
        let v = Array2::<f64>::zeros((3, 3));

        let out = horizontal_divergence(u.view(), v.view(), lat.view(), lon.view()).unwrap();
        let expected = (2.0 / (2.0 * DEG_TO_RAD)) / EARTH_RADIUS;
        assert!((out[[1, 1]] - expected).abs() < 1e-15);
    }

    #[test]
    fn mismatched_v_is_rejected() {
        let lat = array![0.0, 1.0, 2.0];
        let lon = array![0.0, 1.0, 2.0];
        let u = Array2::<f64>::zeros((3, 3));
        let v = Array2::<f64>::zeros((3, 4));

        let result = horizontal_divergence(u.view(), v.view(), lat.view(), lon.view());
        assert!(matches!(result, Err(GradsError::ShapeMismatch { .. })));
    }
}
