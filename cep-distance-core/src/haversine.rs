//! Great-circle distance on a spherical Earth.

/// Earth radius used by [`distance_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points given in decimal degrees.
///
/// Uses a sphere of radius [`EARTH_RADIUS_KM`]. The formula is fixed so
/// results stay comparable with previously published distances:
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// c = 2·atan2(√a, √(1−a))
/// d = R·c
/// ```
///
/// # Examples
///
/// ```
/// use cep_distance_core::haversine::distance_km;
///
/// let km = distance_km(-22.9068, -43.1729, -23.5505, -46.6333);
/// assert!((357.0..=361.0).contains(&km));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point maths"
)]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2.to_radians() - lat1.to_radians();
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let half_lat = (delta_lat / 2.0).sin();
    let half_lon = (delta_lon / 2.0).sin();
    let a = half_lat.powi(2) + lat1_rad.cos() * lat2_rad.cos() * half_lon.powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating-point distances"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rio_to_sao_paulo_matches_published_range() {
        let km = distance_km(-22.9068, -43.1729, -23.5505, -46.6333);
        assert!((357.0..=361.0).contains(&km), "got {km}");
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-22.9068, -43.1729)]
    #[case(89.9, 179.9)]
    fn identical_points_are_zero_apart(#[case] lat: f64, #[case] lon: f64) {
        assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
    }

    #[rstest]
    fn one_degree_of_longitude_on_equator() {
        let km = distance_km(0.0, 0.0, 0.0, 1.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((km - expected).abs() < 1e-9, "got {km}, expected {expected}");
    }

    #[rstest]
    fn antipodes_are_half_the_circumference() {
        let km = distance_km(0.0, 0.0, 0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((km - expected).abs() < 1e-6, "got {km}, expected {expected}");
    }
}
