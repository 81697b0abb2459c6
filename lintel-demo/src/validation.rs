//! Form validation for text fields.
//!
//! Rules run against the value a field currently displays. The first failing
//! rule's message is written back into the field as its error message;
//! passing fields have their error cleared.
//!
//! ```ignore
//! let result = Validator::new()
//!     .field(&username, "username")
//!         .required("Username is required")
//!         .min_length(3, "Must be at least 3 characters long")
//!     .field(&email, "email")
//!         .email("Enter a valid email address")
//!     .validate();
//! ```

use lintel::TextField;

type Rule = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (from `.field()` call).
    pub field_name: String,
    /// Element ID of the field.
    pub widget_id: String,
    pub message: String,
}

/// Result of validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }
}

struct FieldEntry {
    name: String,
    field: TextField,
    rules: Vec<(Rule, String)>,
}

impl FieldEntry {
    fn first_error(&self) -> Option<&str> {
        let value = self.field.displayed_value();
        self.rules
            .iter()
            .find(|(rule, _)| !rule(value.as_str()))
            .map(|(_, msg)| msg.as_str())
    }
}

/// Builder for validating several text fields.
#[derive(Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start adding rules for a field.
    pub fn field(mut self, field: &TextField, name: impl Into<String>) -> Self {
        self.fields.push(FieldEntry {
            name: name.into(),
            field: field.clone(),
            rules: Vec::new(),
        });
        self
    }

    /// Add a rule to the most recently added field.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        if let Some(entry) = self.fields.last_mut() {
            entry.rules.push((Box::new(f), msg.into()));
        }
        self
    }

    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require a valid email address. Empty values pass; use `required`.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    /// Run all rules, updating each field's error message.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for entry in &self.fields {
            match entry.first_error() {
                Some(message) => {
                    log::debug!("validation failed for {}: {}", entry.name, message);
                    entry.field.set_error_message(Some(message.to_string()));
                    errors.push(FieldError {
                        field_name: entry.name.clone(),
                        widget_id: entry.field.element_id(),
                        message: message.to_string(),
                    });
                }
                None => entry.field.set_error_message(None),
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failing_rule_sets_error() {
        let username = TextField::new().label("Username").value("");
        let result = Validator::new()
            .field(&username, "username")
            .required("Username is required")
            .min_length(3, "Too short")
            .validate();

        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].message, "Username is required");
        assert_eq!(result.errors()[0].widget_id, "input-username");
        assert_eq!(username.error().as_deref(), Some("Username is required"));
    }

    #[test]
    fn test_passing_field_clears_error() {
        let email = TextField::new()
            .value("jane@example.com")
            .error_message("old error");

        let result = Validator::new()
            .field(&email, "email")
            .email("Invalid email")
            .validate();

        assert!(result.is_valid());
        assert!(!email.has_error());
    }

    #[test]
    fn test_email_rule() {
        let email = TextField::new().value("not-an-email");
        let result = Validator::new()
            .field(&email, "email")
            .email("Invalid email")
            .validate();

        assert_eq!(result.errors().len(), 1);
        assert!(email.has_error());
    }
}
