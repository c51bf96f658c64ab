use crate::error::{ClientError, Result};

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all fields!";
pub const MISSING_POINTS_ALERT: &str =
    "Please select both departure and arrival points on the map!";
pub const ALREADY_SELECTED_ALERT: &str =
    "You have already selected both departure and arrival points.";

/// Presence check over `(field, value)` pairs. Only an empty string counts
/// as missing; contents are not inspected.
pub fn require_filled(fields: &[(&str, &str)]) -> Result<()> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => {
            tracing::debug!("Submission blocked, missing field: {}", name);
            Err(ClientError::Validation(MISSING_FIELDS_ALERT.to_string()))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present_passes() {
        assert!(require_filled(&[("a", "1"), ("b", "x")]).is_ok());
    }

    #[test]
    fn test_any_empty_field_fails() {
        let err = require_filled(&[("a", "1"), ("b", ""), ("c", "3")]).unwrap_err();
        assert_eq!(err, ClientError::Validation(MISSING_FIELDS_ALERT.to_string()));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert!(require_filled(&[("a", " ")]).is_ok());
    }
}
