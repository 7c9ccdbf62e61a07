//! Enumerated-choice validation

/// Value restriction to a fixed option list
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|option| option.as_ref() == value)
}
