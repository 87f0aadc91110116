use once_cell::sync::Lazy;
use regex::Regex;

use super::{trim_field, FieldError};

/// `local@domain.tld`的宽松结构校验，非RFC校验
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("invalid email pattern.")
});

#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: &str) -> Result<ContactEmail, FieldError> {
        let s = trim_field(s);
        if s.is_empty() {
            return Err(FieldError::MissingField);
        }
        if !EMAIL_PATTERN.is_match(s) {
            tracing::debug!("`{s}` is not a valid contact email.");
            return Err(FieldError::InvalidFormat);
        }
        Ok(Self(s.into()))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
