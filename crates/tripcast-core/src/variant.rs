use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three front-ends over the predict/results service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Text fields including a pickup datetime.
    #[default]
    Form,
    /// Text fields for coordinates only; pickup time is the current time.
    Quick,
    /// Two clicks on a map pick departure and arrival.
    Map,
}

/// Key naming used in the predict payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadStyle {
    Full,
    Compact,
}

/// How predicted durations are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationStyle {
    Seconds,
    MinutesSeconds,
}

impl Variant {
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Form => "Form",
            Variant::Quick => "Quick",
            Variant::Map => "Map",
        }
    }

    pub fn all() -> &'static [Variant] {
        &[Variant::Form, Variant::Quick, Variant::Map]
    }

    pub fn submit_id(&self) -> &'static str {
        match self {
            Variant::Form => "submit",
            Variant::Quick | Variant::Map => "predict-button",
        }
    }

    pub fn input_ids(&self) -> &'static [&'static str] {
        match self {
            Variant::Form => &[
                "pickup_datetime",
                "pickup_longitude",
                "pickup_latitude",
                "dropoff_longitude",
                "dropoff_latitude",
            ],
            Variant::Quick => &["pickup_lat", "pickup_lon", "dropoff_lat", "dropoff_lon"],
            Variant::Map => &["map"],
        }
    }

    pub fn payload_style(&self) -> PayloadStyle {
        match self {
            Variant::Form | Variant::Quick => PayloadStyle::Full,
            Variant::Map => PayloadStyle::Compact,
        }
    }

    pub fn duration_style(&self) -> DurationStyle {
        match self {
            Variant::Form | Variant::Quick => DurationStyle::Seconds,
            Variant::Map => DurationStyle::MinutesSeconds,
        }
    }

    pub fn predict_path(&self) -> &'static str {
        "/predict"
    }

    /// The map page asks for a relative `results`, which resolves against
    /// the current page rather than the site root.
    pub fn results_path(&self) -> &'static str {
        match self {
            Variant::Form | Variant::Quick => "/results",
            Variant::Map => "results",
        }
    }

    pub fn shows_r2(&self) -> bool {
        matches!(self, Variant::Map)
    }

    pub fn missing_input_alert(&self) -> &'static str {
        match self {
            Variant::Form | Variant::Quick => crate::validate::MISSING_FIELDS_ALERT,
            Variant::Map => crate::validate::MISSING_POINTS_ALERT,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Form => "form",
            Variant::Quick => "quick",
            Variant::Map => "map",
        })
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "form" => Ok(Variant::Form),
            "quick" => Ok(Variant::Quick),
            "map" => Ok(Variant::Map),
            other => Err(format!("Unknown variant: {} (expected form, quick or map)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_profiles() {
        assert_eq!(Variant::Form.submit_id(), "submit");
        assert_eq!(Variant::Map.submit_id(), "predict-button");
        assert_eq!(Variant::Quick.payload_style(), PayloadStyle::Full);
        assert_eq!(Variant::Map.payload_style(), PayloadStyle::Compact);
        assert_eq!(Variant::Map.duration_style(), DurationStyle::MinutesSeconds);
        assert_eq!(Variant::Form.results_path(), "/results");
        assert_eq!(Variant::Map.results_path(), "results");
        assert!(Variant::Map.shows_r2());
        assert!(!Variant::Quick.shows_r2());
    }

    #[test]
    fn test_variant_parse_round_trip() {
        for v in Variant::all() {
            assert_eq!(v.to_string().parse::<Variant>().unwrap(), *v);
        }
        assert_eq!(" MAP ".parse::<Variant>().unwrap(), Variant::Map);
        assert!("leaflet".parse::<Variant>().is_err());
    }
}
