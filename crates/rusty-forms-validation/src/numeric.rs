//! Numeric validation functions

/// Where a number sits relative to optional inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Below,
    Within,
    Above,
}

/// Parses a decimal number from user input.
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected so that
/// every accepted value compares meaningfully against a bound.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Checks a value against inclusive minimum and maximum bounds
pub fn check_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> Bound {
    if min.is_some_and(|min| value < min) {
        Bound::Below
    } else if max.is_some_and(|max| value > max) {
        Bound::Above
    } else {
        Bound::Within
    }
}
