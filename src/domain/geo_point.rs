use crate::error::{Error, Result};

/// A WGS84 coordinate supplied by a client
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::ParsingError(format!("Latitude {} out of range", lat)));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(Error::ParsingError(format!("Longitude {} out of range", lng)));
        }
        Ok(Self { lat, lng })
    }

    /// Build a point from optional query values.
    /// A point is only produced when both coordinates are present and non-blank.
    pub fn from_query(lat: Option<&str>, lng: Option<&str>) -> Result<Option<Self>> {
        let lat = lat.map(str::trim).filter(|v| !v.is_empty());
        let lng = lng.map(str::trim).filter(|v| !v.is_empty());

        match (lat, lng) {
            (Some(lat), Some(lng)) => {
                let lat = parse_coordinate("latitude", lat)?;
                let lng = parse_coordinate("longitude", lng)?;
                Self::new(lat, lng).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| Error::ParsingError(format!("Invalid {} \"{}\"", name, value)))
}
