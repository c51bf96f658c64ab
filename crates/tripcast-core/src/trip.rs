use crate::error::Result;
use crate::selection::MapSelection;
use crate::validate::require_filled;
use crate::variant::{PayloadStyle, Variant};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A coordinate as it is sent: typed text from a form, or a number from a map click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Number(v)
    }
}

impl From<String> for Coordinate {
    fn from(v: String) -> Self {
        Coordinate::Text(v)
    }
}

/// Raw field values read at submit time. Empty string means the field was left blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub pickup_datetime: String,
    pub pickup_latitude: String,
    pub pickup_longitude: String,
    pub dropoff_latitude: String,
    pub dropoff_longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullTrip {
    pub pickup_datetime: String,
    pub pickup_longitude: Coordinate,
    pub pickup_latitude: Coordinate,
    pub dropoff_longitude: Coordinate,
    pub dropoff_latitude: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactTrip {
    pub pickup_lat: Coordinate,
    pub pickup_lon: Coordinate,
    pub dropoff_lat: Coordinate,
    pub dropoff_lon: Coordinate,
}

/// Body of `POST /predict`. Only built once every required value is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripRequest {
    Full(FullTrip),
    Compact(CompactTrip),
}

/// `pickup_datetime` default used when the page has no datetime input.
pub fn default_pickup_datetime(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl TripForm {
    /// Stores a value read from the input with element ID `input_id`.
    /// Returns false for IDs that feed no field.
    pub fn set_field(&mut self, input_id: &str, value: String) -> bool {
        let slot = match input_id {
            "pickup_datetime" => &mut self.pickup_datetime,
            "pickup_latitude" | "pickup_lat" => &mut self.pickup_latitude,
            "pickup_longitude" | "pickup_lon" => &mut self.pickup_longitude,
            "dropoff_latitude" | "dropoff_lat" => &mut self.dropoff_latitude,
            "dropoff_longitude" | "dropoff_lon" => &mut self.dropoff_longitude,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn required_fields(&self, variant: Variant) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::with_capacity(5);
        if variant == Variant::Form {
            fields.push(("pickup_datetime", self.pickup_datetime.as_str()));
        }
        fields.extend([
            ("pickup_longitude", self.pickup_longitude.as_str()),
            ("pickup_latitude", self.pickup_latitude.as_str()),
            ("dropoff_longitude", self.dropoff_longitude.as_str()),
            ("dropoff_latitude", self.dropoff_latitude.as_str()),
        ]);
        fields
    }
}

impl TripRequest {
    /// Validates a text form and builds the payload for `variant`. The quick
    /// variant ignores any typed datetime and uses `now`.
    pub fn from_form(form: TripForm, variant: Variant, now: DateTime<Utc>) -> Result<Self> {
        require_filled(&form.required_fields(variant))?;

        let request = match variant.payload_style() {
            PayloadStyle::Full => {
                let pickup_datetime = match variant {
                    Variant::Form => form.pickup_datetime,
                    _ => default_pickup_datetime(now),
                };
                TripRequest::Full(FullTrip {
                    pickup_datetime,
                    pickup_longitude: form.pickup_longitude.into(),
                    pickup_latitude: form.pickup_latitude.into(),
                    dropoff_longitude: form.dropoff_longitude.into(),
                    dropoff_latitude: form.dropoff_latitude.into(),
                })
            }
            PayloadStyle::Compact => TripRequest::Compact(CompactTrip {
                pickup_lat: form.pickup_latitude.into(),
                pickup_lon: form.pickup_longitude.into(),
                dropoff_lat: form.dropoff_latitude.into(),
                dropoff_lon: form.dropoff_longitude.into(),
            }),
        };
        Ok(request)
    }

    /// Builds the map payload; fails with the selection alert until both points exist.
    pub fn from_selection(selection: &MapSelection) -> Result<Self> {
        let (departure, arrival) = selection.endpoints()?;
        Ok(TripRequest::Compact(CompactTrip {
            pickup_lat: departure.lat.into(),
            pickup_lon: departure.lng.into(),
            dropoff_lat: arrival.lat.into(),
            dropoff_lon: arrival.lng.into(),
        }))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::selection::GeoPoint;
    use crate::validate::{MISSING_FIELDS_ALERT, MISSING_POINTS_ALERT};
    use chrono::TimeZone;

    fn filled_form() -> TripForm {
        TripForm {
            pickup_datetime: "2016-03-14T17:24".to_string(),
            pickup_latitude: "40.767".to_string(),
            pickup_longitude: "-73.982".to_string(),
            dropoff_latitude: "40.765".to_string(),
            dropoff_longitude: "-73.964".to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_form_payload_keeps_typed_strings_in_order() {
        let req = TripRequest::from_form(filled_form(), Variant::Form, fixed_now()).unwrap();
        assert_eq!(
            req.to_json().unwrap(),
            r#"{"pickup_datetime":"2016-03-14T17:24","pickup_longitude":"-73.982","pickup_latitude":"40.767","dropoff_longitude":"-73.964","dropoff_latitude":"40.765"}"#
        );
    }

    #[test]
    fn test_quick_payload_defaults_datetime_to_now() {
        let form = TripForm {
            pickup_datetime: String::new(),
            ..filled_form()
        };
        let req = TripRequest::from_form(form, Variant::Quick, fixed_now()).unwrap();
        match req {
            TripRequest::Full(trip) => {
                assert_eq!(trip.pickup_datetime, "2024-05-01T12:30:00.000Z")
            }
            other => panic!("expected full payload, got {:?}", other),
        }
    }

    #[test]
    fn test_every_missing_field_blocks_submission() {
        for variant in [Variant::Form, Variant::Quick, Variant::Map] {
            let blanks: [fn(&mut TripForm); 4] = [
                |f: &mut TripForm| f.pickup_latitude.clear(),
                |f: &mut TripForm| f.pickup_longitude.clear(),
                |f: &mut TripForm| f.dropoff_latitude.clear(),
                |f: &mut TripForm| f.dropoff_longitude.clear(),
            ];
            for blank in blanks {
                let mut form = filled_form();
                blank(&mut form);
                let err = TripRequest::from_form(form, variant, fixed_now()).unwrap_err();
                assert_eq!(err, ClientError::Validation(MISSING_FIELDS_ALERT.to_string()));
            }
        }
    }

    #[test]
    fn test_set_field_accepts_both_id_spellings() {
        let mut form = TripForm::default();
        for id in Variant::Quick.input_ids() {
            assert!(form.set_field(id, format!("v-{}", id)));
        }
        assert_eq!(form.pickup_latitude, "v-pickup_lat");
        assert_eq!(form.dropoff_longitude, "v-dropoff_lon");

        assert!(form.set_field("pickup_latitude", "40.1".to_string()));
        assert_eq!(form.pickup_latitude, "40.1");
        assert!(!form.set_field("map", "ignored".to_string()));
    }

    #[test]
    fn test_form_variant_requires_datetime() {
        let form = TripForm {
            pickup_datetime: String::new(),
            ..filled_form()
        };
        assert!(TripRequest::from_form(form, Variant::Form, fixed_now())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_selection_payload_uses_compact_numbers() {
        let mut sel = MapSelection::new();
        sel.click(GeoPoint::new(40.7128, -74.006)).unwrap();
        sel.click(GeoPoint::new(40.73, -73.99)).unwrap();

        let req = TripRequest::from_selection(&sel).unwrap();
        assert_eq!(
            req.to_json().unwrap(),
            r#"{"pickup_lat":40.7128,"pickup_lon":-74.006,"dropoff_lat":40.73,"dropoff_lon":-73.99}"#
        );
    }

    #[test]
    fn test_incomplete_selection_is_not_sent() {
        let mut sel = MapSelection::new();
        sel.click(GeoPoint::new(40.7128, -74.006)).unwrap();
        assert_eq!(
            TripRequest::from_selection(&sel).unwrap_err(),
            ClientError::Validation(MISSING_POINTS_ALERT.to_string())
        );
    }
}
