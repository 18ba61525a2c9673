//! Field validators shared by the login, signup and item forms.
//!
//! Each validator is a pure function returning `Some(message)` when the
//! value is rejected, so screens can bind the result straight to a
//! per-field error signal. A form that fails validation never reaches the
//! network.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email pattern"));

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("valid price pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;

/// Rejects empty (or whitespace-only) values.
pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

/// Requires a non-empty value of the shape `something@host.tld`.
pub fn email_format(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some("Email is required".to_string())
    } else if !EMAIL_RE.is_match(value) {
        Some("Invalid email format".to_string())
    } else {
        None
    }
}

/// Signup password rule: present and at least [`MIN_PASSWORD_LEN`] characters.
pub fn min_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_string())
    } else if value.len() < MIN_PASSWORD_LEN {
        Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ))
    } else {
        None
    }
}

pub fn passwords_match(password: &str, confirmation: &str) -> Option<String> {
    if password != confirmation {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

/// Price must be a plain decimal with at most two fraction digits.
pub fn price_format(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some("Price is required".to_string())
    } else if !PRICE_RE.is_match(value) {
        Some("Price must be a valid number".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        assert!(required("", "Name").is_some());
        assert!(required("   ", "Name").is_some());
        assert_eq!(required("Desk", "Name"), None);
    }

    #[test]
    fn email_shape_is_enforced() {
        assert_eq!(email_format("ada@example.com"), None);
        assert_eq!(
            email_format("not-an-email").as_deref(),
            Some("Invalid email format")
        );
        assert_eq!(email_format("a@b").as_deref(), Some("Invalid email format"));
        assert_eq!(email_format("").as_deref(), Some("Email is required"));
    }

    #[test]
    fn password_rules() {
        assert!(min_password("").is_some());
        assert!(min_password("12345").is_some());
        assert_eq!(min_password("123456"), None);

        assert_eq!(passwords_match("secret", "secret"), None);
        assert_eq!(
            passwords_match("secret", "secrets").as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn price_accepts_up_to_two_decimals() {
        assert_eq!(price_format("12"), None);
        assert_eq!(price_format("12.50"), None);
        assert_eq!(price_format("0.5"), None);
        assert!(price_format("12.5.0").is_some());
        assert!(price_format("abc").is_some());
        assert!(price_format("12.505").is_some());
        assert!(price_format("-3").is_some());
        assert!(price_format("").is_some());
    }
}
