use crate::error::{ClientError, Result};
use crate::validate::{ALREADY_SELECTED_ALERT, MISSING_POINTS_ALERT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// Parses `LAT,LON` as typed on the command line.
impl FromStr for GeoPoint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected LAT,LON but got: {}", s))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid latitude '{}': {}", lat.trim(), e))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid longitude '{}': {}", lng.trim(), e))?;
        Ok(Self { lat, lng })
    }
}

/// Which endpoint a click filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pick {
    Departure(GeoPoint),
    Arrival(GeoPoint),
}

impl Pick {
    pub fn point(&self) -> GeoPoint {
        match self {
            Pick::Departure(p) | Pick::Arrival(p) => *p,
        }
    }

    /// Marker label shown on the map.
    pub fn label(&self) -> &'static str {
        match self {
            Pick::Departure(_) => "Departure",
            Pick::Arrival(_) => "Arrival",
        }
    }
}

/// Departure and arrival captured from map clicks. Only ever moves forward:
/// once a point is set it stays set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MapSelection {
    #[default]
    Empty,
    OnePoint {
        departure: GeoPoint,
    },
    TwoPoints {
        departure: GeoPoint,
        arrival: GeoPoint,
    },
}

impl MapSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a map click. A click after both points are set is rejected and
    /// leaves the selection as it was.
    pub fn click(&mut self, point: GeoPoint) -> Result<Pick> {
        match *self {
            MapSelection::Empty => {
                *self = MapSelection::OnePoint { departure: point };
                Ok(Pick::Departure(point))
            }
            MapSelection::OnePoint { departure } => {
                *self = MapSelection::TwoPoints {
                    departure,
                    arrival: point,
                };
                Ok(Pick::Arrival(point))
            }
            MapSelection::TwoPoints { .. } => {
                Err(ClientError::Validation(ALREADY_SELECTED_ALERT.to_string()))
            }
        }
    }

    pub fn departure(&self) -> Option<GeoPoint> {
        match self {
            MapSelection::Empty => None,
            MapSelection::OnePoint { departure } | MapSelection::TwoPoints { departure, .. } => {
                Some(*departure)
            }
        }
    }

    pub fn arrival(&self) -> Option<GeoPoint> {
        match self {
            MapSelection::TwoPoints { arrival, .. } => Some(*arrival),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, MapSelection::TwoPoints { .. })
    }

    /// Both points, or the alert asking the user to finish selecting.
    pub fn endpoints(&self) -> Result<(GeoPoint, GeoPoint)> {
        match self {
            MapSelection::TwoPoints { departure, arrival } => Ok((*departure, *arrival)),
            _ => Err(ClientError::Validation(MISSING_POINTS_ALERT.to_string())),
        }
    }
}
