//! Form-level validation for new tickets.
//!
//! Validation happens before a draft reaches the store, and failures come
//! back as a field-to-message map rather than a bail-out on the first
//! problem. The email pattern is deliberately lax: it only checks the
//! `local@domain.tld` shape.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Priority;
use crate::store::TicketDraft;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern compiles")
});

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    pub customer_name: String,
    pub email: String,
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
}

/// Field-name-to-message map, in the order fields are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(name, message)| (*name, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid field(s):", self.errors.len())?;
        for (name, message) in &self.errors {
            write!(f, " {name}: {message};")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl TicketForm {
    /// Check required fields and the email shape; on success, produce the
    /// draft the store accepts. A missing priority defaults to Medium, the
    /// form's preselected level.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its user-facing message.
    pub fn validate(&self) -> Result<TicketDraft, FieldErrors> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push(("customerName", "Customer name is required".to_string()));
        }
        if self.title.trim().is_empty() {
            errors.push(("title", "Title is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            errors.push(("email", "Please enter a valid email address".to_string()));
        }
        if self.description.trim().is_empty() {
            errors.push(("description", "Description is required".to_string()));
        }

        if !errors.is_empty() {
            return Err(FieldErrors { errors });
        }

        Ok(TicketDraft {
            title: self.title.clone(),
            customer_name: self.customer_name.clone(),
            email: self.email.clone(),
            description: self.description.clone(),
            priority: self.priority.unwrap_or(Priority::Medium),
        })
    }
}

/// Lax `local@domain.tld` shape check. Intentionally permissive.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
