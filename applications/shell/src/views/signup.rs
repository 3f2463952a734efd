//! Sign-up form.

use crate::views::fields::{render_field, FormErrors, FormField};
use todo_client::{SignupRequest, TodoClient};
use todo_session::{Navigator, Route};
use tracing::{debug, info};

/// Controlled signup form.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    errors: FormErrors,
}

impl SignupForm {
    pub const FIELDS: [FormField; 5] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let value = value.into();
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
        true
    }

    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Required fields, then password confirmation.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();

        for field in Self::FIELDS {
            if self.value(field).trim().is_empty() {
                errors.set_field(field, format!("{} is required", field.label()));
            }
        }

        if errors.field(FormField::ConfirmPassword).is_none()
            && self.password != self.confirm_password
        {
            errors.set_field(FormField::ConfirmPassword, "Passwords do not match");
        }

        errors
    }

    /// Validate, then create the account.
    ///
    /// On success the form is cleared, the user is sent to the login page and
    /// the backend's message is returned for display there.
    pub async fn submit(&mut self, client: &TodoClient, navigator: &dyn Navigator) -> Option<String> {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        let request = SignupRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        match client.auth().signup(&request).await {
            Ok(response) => {
                info!(user_id = %response.user.id, "Account created");
                *self = Self::default();
                navigator.navigate(Route::Login);
                Some(response.message)
            }
            Err(e) => {
                debug!(error = %e, "Signup rejected");
                self.errors = FormErrors::from_client_error(&e, &Self::FIELDS);
                None
            }
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec!["Sign up".to_string(), String::new()];

        if let Some(banner) = self.errors.banner() {
            lines.push(format!("  ! {}", banner));
            lines.push(String::new());
        }

        for field in Self::FIELDS {
            let reveal = match field {
                FormField::Password => self.show_password,
                FormField::ConfirmPassword => self.show_confirm_password,
                _ => true,
            };
            lines.extend(render_field(field, self.value(field), reveal, &self.errors));
        }

        lines.push(String::new());
        lines.push("  [Sign Up]".to_string());
        lines.push(String::new());
        lines.push("Already have an account? Sign In (type `login`)".to_string());

        lines.join("\n")
    }
}
