use crate::config::EarthModel;
use crate::math::{km_to_m, m_to_km, Point2};

/// Converts a geographic point (lon, lat in degrees) into local plane
/// kilometers relative to `origin`.
///
/// Longitude is scaled by the parallel radius at the point's own latitude,
/// latitude by the constant meridian arc length per degree.
#[must_use]
pub fn to_local(geo: &Point2, origin: &Point2, earth: &EarthModel) -> Point2 {
    let latitude = geo.y;
    let x = (geo.x - origin.x) * earth.meters_per_degree_longitude(latitude);
    let y = (geo.y - origin.y) * earth.meters_per_degree_latitude();
    Point2::new(m_to_km(x), m_to_km(y))
}

/// Inverse of [`to_local`].
///
/// The latitude is reconstructed first, then used to evaluate the parallel
/// radius for the longitude.
#[must_use]
pub fn to_geo(local: &Point2, origin: &Point2, earth: &EarthModel) -> Point2 {
    let d_lat = km_to_m(local.y) / earth.meters_per_degree_latitude();
    let latitude = d_lat + origin.y;
    let d_lon = km_to_m(local.x) / earth.meters_per_degree_longitude(latitude);
    Point2::new(origin.x + d_lon, latitude)
}
