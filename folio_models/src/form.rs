use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    contact::{ContactMessageContent, ContactName, ContactPayload},
    email_address::EmailAddress,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Runs the single-field rule for this field.
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Name => validate_name(value).map(drop),
            Self::Email => validate_email(value).map(drop),
            Self::Message => validate_message(value).map(drop),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name required")]
    NameRequired,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Message required")]
    MessageRequired,
}

pub fn validate_name(value: &str) -> Result<ContactName, FieldError> {
    ContactName::try_new(value).map_err(|_| FieldError::NameRequired)
}

pub fn validate_email(value: &str) -> Result<EmailAddress, FieldError> {
    EmailAddress::try_new(value).map_err(|_| FieldError::InvalidEmail)
}

pub fn validate_message(value: &str) -> Result<ContactMessageContent, FieldError> {
    ContactMessageContent::try_new(value).map_err(|_| FieldError::MessageRequired)
}

/// Validates every field and reports all failures at once.
pub fn validate_all(values: &FieldValues) -> Result<ContactPayload, FieldErrors> {
    let name = validate_name(&values.name);
    let email = validate_email(&values.email);
    let message = validate_message(&values.message);

    match (name, email, message) {
        (Ok(name), Ok(email), Ok(message)) => Ok(ContactPayload {
            name,
            email,
            message,
        }),
        (name, email, message) => {
            let mut errors = FieldErrors::default();
            [
                (FormField::Name, name.err()),
                (FormField::Email, email.err()),
                (FormField::Message, message.err()),
            ]
            .into_iter()
            .filter_map(|(field, error)| Some((field, error?)))
            .for_each(|(field, error)| errors.insert(field, error));
            Err(errors)
        }
    }
}

/// Raw, unvalidated field contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

/// Per-field UI state.
///
/// `error` is only populated once the field is `touched`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStates {
    pub name: FieldState,
    pub email: FieldState,
    pub message: FieldState,
}

impl FieldStates {
    pub fn get(&self, field: FormField) -> &FieldState {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut FieldState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn values(&self) -> FieldValues {
        FieldValues {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn name() {
        for (input, ok) in [
            ("", false),
            ("J", false),
            ("  J ", false),
            ("Jo", true),
            (" Jane Doe ", true),
        ] {
            let result = validate_name(input);
            assert_eq!(result.is_ok(), ok, "{input:?}");
            if !ok {
                assert_eq!(result.unwrap_err().to_string(), "Name required");
            }
        }
    }

    #[test]
    fn email() {
        assert_eq!(
            validate_email("x").unwrap_err().to_string(),
            "Invalid email"
        );
        assert_eq!(
            validate_email("a@b").unwrap_err(),
            FieldError::InvalidEmail
        );
        assert_eq!(validate_email("a@b.co").unwrap().as_str(), "a@b.co");
    }

    #[test]
    fn message() {
        assert_eq!(
            validate_message("short").unwrap_err().to_string(),
            "Message required"
        );
        assert_eq!(
            validate_message("         x").unwrap_err(),
            FieldError::MessageRequired
        );
        assert!(validate_message("Hello there").is_ok());
    }

    #[test]
    fn all_ok() {
        let values = FieldValues {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello, I would like to connect.".into(),
        };

        let payload = validate_all(&values).unwrap();

        assert_eq!(*payload.name, "Jane Doe");
        assert_eq!(payload.email.as_str(), "jane@example.com");
        assert_eq!(*payload.message, "Hello, I would like to connect.");
    }

    #[test]
    fn all_reports_every_field() {
        let values = FieldValues {
            name: "".into(),
            email: "x".into(),
            message: "short".into(),
        };

        let errors = validate_all(&values).unwrap_err();

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [
                (FormField::Name, FieldError::NameRequired),
                (FormField::Email, FieldError::InvalidEmail),
                (FormField::Message, FieldError::MessageRequired),
            ]
        );
    }

    #[test]
    fn all_reports_only_invalid_fields() {
        let values = FieldValues {
            name: "Jane Doe".into(),
            email: "jane@example".into(),
            message: "Hello, I would like to connect.".into(),
        };

        let errors = validate_all(&values).unwrap_err();

        assert_eq!(errors.iter().count(), 1);
        assert_eq!(errors.get(FormField::Email), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get(FormField::Name), None);
    }

    #[test]
    fn field_validate_matches_rules() {
        assert_eq!(FormField::Name.validate("J"), Err(FieldError::NameRequired));
        assert_eq!(FormField::Email.validate("a@b.co"), Ok(()));
        assert_eq!(
            FormField::Message.validate(""),
            Err(FieldError::MessageRequired)
        );
    }

    #[test]
    fn field_names() {
        for field in FormField::ALL {
            assert_eq!(
                serde_json::to_string(&field).unwrap(),
                format!("\"{}\"", field.as_str())
            );
        }
    }
}
