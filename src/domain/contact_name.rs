use super::{trim_field, FieldError};

#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: &str) -> Result<ContactName, FieldError> {
        let s = trim_field(s);
        if s.is_empty() {
            return Err(FieldError::MissingField);
        }
        Ok(Self(s.into()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
