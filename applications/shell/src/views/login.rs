//! Sign-in form.

use crate::views::fields::{render_field, FormErrors, FormField};
use todo_client::LoginRequest;
use todo_session::AuthSession;
use tracing::debug;

/// Controlled login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    errors: FormErrors,
}

impl LoginForm {
    pub const FIELDS: [FormField; 2] = [FormField::Email, FormField::Password];

    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value. Returns `false` for fields this form does not have.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> bool {
        match field {
            FormField::Email => self.email = value.into(),
            FormField::Password => self.password = value.into(),
            _ => return false,
        }
        true
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Required-field check
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.email.trim().is_empty() {
            errors.set_field(FormField::Email, "Email is required");
        }
        if self.password.is_empty() {
            errors.set_field(FormField::Password, "Password is required");
        }
        errors
    }

    /// Validate, then sign in through the session.
    ///
    /// On success the session has already navigated home and the form is
    /// cleared. On failure the error is shown on the form.
    pub async fn submit(&mut self, session: &AuthSession) -> bool {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        let request = LoginRequest::new(self.email.trim(), self.password.clone());
        match session.login(&request).await {
            Ok(_) => {
                *self = Self::default();
                true
            }
            Err(e) => {
                debug!(error = %e, "Login rejected");
                self.errors = FormErrors::from_client_error(&e, &Self::FIELDS);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec!["Sign in".to_string(), String::new()];

        if let Some(banner) = self.errors.banner() {
            lines.push(format!("  ! {}", banner));
            lines.push(String::new());
        }

        lines.extend(render_field(FormField::Email, &self.email, true, &self.errors));
        lines.extend(render_field(
            FormField::Password,
            &self.password,
            self.show_password,
            &self.errors,
        ));

        lines.push(String::new());
        lines.push("  [Sign In]".to_string());
        lines.push(String::new());
        lines.push("Don't have an account? Sign up (type `signup`)".to_string());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let form = LoginForm::new();
        let errors = form.validate();
        assert_eq!(errors.field(FormField::Email), Some("Email is required"));
        assert_eq!(errors.field(FormField::Password), Some("Password is required"));

        let mut form = LoginForm::new();
        form.set(FormField::Email, "a@b.com");
        form.set(FormField::Password, "secret123");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_set_rejects_foreign_fields() {
        let mut form = LoginForm::new();
        assert!(!form.set(FormField::FirstName, "A"));
        assert!(form.set(FormField::Email, "a@b.com"));
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn test_render_masks_password_until_shown() {
        let mut form = LoginForm::new();
        form.set(FormField::Password, "secret123");
        assert!(!form.render().contains("secret123"));

        form.toggle_password_visibility();
        assert!(form.render().contains("secret123"));
    }
}
