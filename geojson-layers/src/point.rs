use geojson::Position;
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// 2d point on the map surface, stored in latitude/longitude order.
///
/// This type is the only place where the coordinate axis order changes: GeoJSON
/// positions are `[longitude, latitude]`, map points are `(latitude, longitude)`.
/// Every coordinate crossing between the two models must go through
/// [`MapPoint::try_from`] or [`MapPoint::to_position`], so the swap is applied
/// exactly once in each direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct MapPoint {
    lat: f64,
    lon: f64,
}

impl MapPoint {
    /// Creates a new point from latitude and longitude values (in degrees).
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Converts the point into a GeoJSON position, restoring the
    /// `[longitude, latitude]` ordinate order.
    pub fn to_position(&self) -> Position {
        vec![self.lon, self.lat]
    }
}

impl TryFrom<&Position> for MapPoint {
    type Error = ConversionError;

    /// Reads a `[longitude, latitude, ...]` position. Ordinates past the second
    /// (elevation and the like) are dropped.
    fn try_from(value: &Position) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(ConversionError::InvalidPosition(
                "position must contain at least 2 ordinates".to_string(),
            ))
        } else {
            Ok(MapPoint {
                lat: value[1],
                lon: value[0],
            })
        }
    }
}
