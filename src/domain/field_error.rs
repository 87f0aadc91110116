use std::fmt::Display;

/// 联系表单中的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 去除首尾空白，包括`\u{FEFF}`
pub fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field is required.")]
    MissingField,
    #[error("field has an invalid format.")]
    InvalidFormat,
}

impl FieldError {
    /// 显示在字段下方的提示信息
    pub fn message(&self, field: Field) -> &'static str {
        match (self, field) {
            (FieldError::MissingField, Field::Name) => "Name is required",
            (FieldError::MissingField, Field::Email) => "Email is required",
            (FieldError::MissingField, Field::Message) => "Message is required",
            (FieldError::InvalidFormat, Field::Email) => "Please enter a valid email address",
            (FieldError::InvalidFormat, Field::Name) => "Please enter a valid name",
            (FieldError::InvalidFormat, Field::Message) => "Please enter a valid message",
        }
    }
}
