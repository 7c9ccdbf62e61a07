//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// The "valid e-mail address" production browsers apply to `<input type=email>`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Validates email format the way a browser's built-in check does.
///
/// The empty string is not a valid address; whether an empty optional field
/// passes is decided by the caller.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
