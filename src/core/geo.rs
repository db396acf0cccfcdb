//! Great-circle distance on a spherical Earth.

use crate::domain::model::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed user location for every distance in the listing (Rourkela).
pub const REFERENCE_POINT: Coordinate = Coordinate::new_unchecked(22.2258, 84.8436);

/// Haversine distance in kilometres.
///
/// Total over valid coordinates, poles and antipodes included: `a` is clamped
/// to `[0, 1]` so rounding noise never reaches `sqrt` of a negative. Range
/// checks belong to [`Coordinate::new`]; unchecked out-of-range values are
/// computed as given.
pub fn distance_km(origin: Coordinate, destination: Coordinate) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = destination.latitude.to_radians();
    let d_lat = (destination.latitude - origin.latitude).to_radians();
    let d_lon = (destination.longitude - origin.longitude).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
