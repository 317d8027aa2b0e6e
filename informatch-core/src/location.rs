//! Parse coordinate text and measure distances between people.
//!
//! Datasets store a location as `"<latitude>,<longitude>"` or
//! `"<latitude>;<longitude>"`. Parsing happens once, when records are built;
//! scoring only sees typed [`Coord`] values.

use geo::{Coord, Distance, Geodesic, Point};
use thiserror::Error;

const LOCATION_SEPARATORS: [char; 2] = [',', ';'];
const METRES_PER_KILOMETRE: f64 = 1_000.0;

/// Errors returned by [`parse_location`] and [`validate_coordinates`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// The text is not two separated floating-point numbers.
    #[error("malformed location {raw:?}: expected \"<latitude>,<longitude>\"")]
    Malformed {
        /// Raw text that failed to parse.
        raw: String,
    },
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {latitude} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Offending latitude.
        latitude: f64,
    },
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {longitude} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Offending longitude.
        longitude: f64,
    },
}

/// Parse `"<latitude>,<longitude>"` (or `;`-separated) into a coordinate.
///
/// The returned coordinate follows the `geo` convention of
/// `x = longitude`, `y = latitude`.
///
/// # Errors
/// Returns [`LocationError::Malformed`] when the text does not hold exactly
/// two finite numbers, and a range error when either value is out of bounds.
///
/// # Examples
/// ```
/// use informatch_core::parse_location;
///
/// let coord = parse_location("52.52, 13.40").expect("valid location");
/// assert_eq!(coord.y, 52.52);
/// assert_eq!(coord.x, 13.40);
/// assert!(parse_location("52.52").is_err());
/// ```
pub fn parse_location(raw: &str) -> Result<Coord<f64>, LocationError> {
    let malformed = || LocationError::Malformed {
        raw: raw.to_owned(),
    };
    let mut parts = raw.split(LOCATION_SEPARATORS).map(str::trim);
    let (Some(lat_text), Some(lon_text), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let latitude = lat_text.parse::<f64>().map_err(|_| malformed())?;
    let longitude = lon_text.parse::<f64>().map_err(|_| malformed())?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(malformed());
    }
    validate_coordinates(latitude, longitude)
}

/// Range-check a latitude/longitude pair and build a coordinate.
///
/// # Errors
/// Returns [`LocationError::LatitudeOutOfRange`] or
/// [`LocationError::LongitudeOutOfRange`] when a value is out of bounds.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<Coord<f64>, LocationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(LocationError::LatitudeOutOfRange { latitude });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(LocationError::LongitudeOutOfRange { longitude });
    }
    Ok(Coord {
        x: longitude,
        y: latitude,
    })
}

/// Geodesic distance in kilometres on the WGS84 ellipsoid.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use informatch_core::geodesic_distance_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// assert!(geodesic_distance_km(origin, origin) < 1e-9);
/// // One degree of longitude along the equator is roughly 111.3 km.
/// let east = Coord { x: 1.0, y: 0.0 };
/// assert!((geodesic_distance_km(origin, east) - 111.32).abs() < 0.1);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting metres to kilometres requires a division"
)]
pub fn geodesic_distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let metres = Geodesic.distance(Point::from(from), Point::from(to));
    metres / METRES_PER_KILOMETRE
}
