//! String validation functions

use std::fmt;

/// Length of a value in characters (Unicode scalar values), not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A value shorter than the required minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooShort {
    pub min: usize,
    pub actual: usize,
}

impl fmt::Display for TooShort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Must be at least {} characters", self.min)
    }
}

/// Validates minimum string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), TooShort> {
    let actual = char_len(s);
    if actual >= min {
        Ok(())
    } else {
        Err(TooShort { min, actual })
    }
}

/// True when the value has no content once surrounding whitespace is dropped
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
