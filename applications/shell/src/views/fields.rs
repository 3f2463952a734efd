//! Form fields, their backend names, and per-field error display.

use std::collections::BTreeMap;
use todo_client::ClientError;

/// Every input on the login and signup forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

/// Backend validation key → form field.
///
/// Hand-maintained: nothing checks it against the backend's keys. A key
/// missing here never shows inline; the error falls back to the banner.
const SERVER_FIELD_NAMES: &[(&str, FormField)] = &[
    ("first_name", FormField::FirstName),
    ("last_name", FormField::LastName),
    ("email", FormField::Email),
    ("password", FormField::Password),
];

impl FormField {
    /// Client-side field name
    pub fn name(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "E-mail address",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Re-enter the password",
        }
    }

    /// Translate a backend validation key
    pub fn from_server_key(key: &str) -> Option<Self> {
        SERVER_FIELD_NAMES
            .iter()
            .find(|(server, _)| *server == key)
            .map(|(_, field)| *field)
    }

    /// Parse a field name typed in the shell: the client name or a short alias.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "firstName" | "first" => Some(FormField::FirstName),
            "lastName" | "last" => Some(FormField::LastName),
            "email" => Some(FormField::Email),
            "password" => Some(FormField::Password),
            "confirmPassword" | "confirm" => Some(FormField::ConfirmPassword),
            _ => None,
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FormField::Password | FormField::ConfirmPassword)
    }
}

/// Errors shown on a form: one message per field plus an optional banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
    banner: Option<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a failed submission onto a form that has `fields`.
    ///
    /// Recognized validation keys land on their field, verbatim (first
    /// message). Unrecognized keys are dropped. When nothing lands on a
    /// field the error message becomes the banner.
    pub fn from_client_error(error: &ClientError, fields: &[FormField]) -> Self {
        let mut errors = Self::new();

        if let Some(validation) = error.validation_errors() {
            for (key, messages) in validation.iter() {
                let Some(field) = FormField::from_server_key(key) else {
                    continue;
                };
                if !fields.contains(&field) {
                    continue;
                }
                if let Some(message) = messages.first() {
                    errors.set_field(field, message.clone());
                }
            }
        }

        if errors.fields.is_empty() {
            errors.banner = Some(error.user_message());
        }

        errors
    }

    pub fn set_field(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.banner.is_none()
    }
}

/// One form row: `Label: value` and the field's error underneath.
pub(crate) fn render_field(
    field: FormField,
    value: &str,
    reveal: bool,
    errors: &FormErrors,
) -> Vec<String> {
    let shown = if field.is_secret() && !reveal {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let mut lines = vec![format!("  {:<22} {}", format!("{}:", field.label()), shown)];
    if let Some(message) = errors.field(field) {
        lines.push(format!("  {:<22} ! {}", "", message));
    }
    lines
}
