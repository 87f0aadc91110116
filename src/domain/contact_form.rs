use std::collections::BTreeMap;

use super::{ContactEmail, ContactMessage, ContactName, Field, FieldError};

/// 用户在表单中输入的原始内容，每次提交重新构造
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl FormInput {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.field_errors.get(&field).copied()
    }

    pub fn field_errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.field_errors.iter().map(|(field, error)| (*field, *error))
    }

    fn record<T>(&mut self, field: Field, parsed: Result<T, FieldError>) -> Option<T> {
        match parsed {
            Ok(value) => Some(value),
            Err(e) => {
                self.field_errors.insert(field, e);
                None
            }
        }
    }
}

/// 通过校验的联系表单，字段值已去除首尾空白
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
}

impl ContactForm {
    /// 转发邮件的主题
    pub fn subject(&self) -> String {
        format!("Portfolio Contact: {}", self.name.as_ref())
    }
}

impl TryFrom<&FormInput> for ContactForm {
    type Error = ValidationResult;

    /// 一次性收集全部字段的错误，而不是遇到第一个错误就返回
    fn try_from(input: &FormInput) -> Result<Self, Self::Error> {
        let mut result = ValidationResult::default();
        let name = result.record(Field::Name, ContactName::parse(&input.name));
        let email = result.record(Field::Email, ContactEmail::parse(&input.email));
        let message = result.record(Field::Message, ContactMessage::parse(&input.message));

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(result),
        }
    }
}

pub fn validate(input: &FormInput) -> ValidationResult {
    ContactForm::try_from(input).err().unwrap_or_default()
}
