use super::{trim_field, FieldError};

#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: &str) -> Result<ContactMessage, FieldError> {
        let s = trim_field(s);
        if s.is_empty() {
            return Err(FieldError::MissingField);
        }
        Ok(Self(s.into()))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
