use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::Sign;
use std::str::FromStr;

/// Formats `value` with exactly `places` decimals, rounding half away from
/// zero on the shortest decimal form of the number (10.555 -> "10.56").
pub fn fixed(value: f64, places: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let Ok(decimal) = BigDecimal::from_str(&value.to_string()) else {
        return format!("{:.*}", places as usize, value);
    };

    let rounded = decimal.with_scale_round(places as i64, RoundingMode::HalfUp);
    let (digits, _) = rounded.as_bigint_and_exponent();

    let places = places as usize;
    let mut text = digits.magnitude().to_string();
    if text.len() <= places {
        text = format!("{}{}", "0".repeat(places + 1 - text.len()), text);
    }
    if places > 0 {
        text.insert(text.len() - places, '.');
    }
    if digits.sign() == Sign::Minus {
        text.insert(0, '-');
    }
    text
}

/// Whole minutes and the remaining seconds rounded to the nearest integer
/// (half rounds up).
pub fn minutes_seconds(seconds: f64) -> (i64, i64) {
    let minutes = (seconds / 60.0).floor();
    let remainder = (seconds % 60.0 + 0.5).floor();
    (minutes as i64, remainder as i64)
}
