//! Form field validation shared by the login, user, and settings forms.
//!
//! Errors are keyed by field name so callers can show each message next to
//! the offending field. Validation never fails past the form that ran it.

use std::collections::BTreeMap;

/// Field name -> user-facing message.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &'static str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, message);
        false
    } else {
        true
    }
}

/// Accumulates field errors for one form submission.
pub(crate) struct FormCheck {
    errors: FieldErrors,
}

impl FormCheck {
    pub(crate) fn new() -> Self {
        Self { errors: FieldErrors::new() }
    }

    pub(crate) fn required(mut self, field: &'static str, value: &str, message: &'static str) -> Self {
        require(&mut self.errors, field, value, message);
        self
    }

    pub(crate) fn email(mut self, field: &'static str, value: &str) -> Self {
        if require(&mut self.errors, field, value, "Email is required") && !is_valid_email(value) {
            self.errors.insert(field, "Invalid email format");
        }
        self
    }

    /// Record `message` unless `ok`; an earlier error on the field wins.
    pub(crate) fn rule(mut self, field: &'static str, ok: bool, message: &'static str) -> Self {
        if !ok {
            self.errors.entry(field).or_insert(message);
        }
        self
    }

    pub(crate) fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() { Ok(()) } else { Err(self.errors) }
    }
}

/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    FormCheck::new()
        .email("email", email)
        .required("password", password, "Password is required")
        .finish()
}

/// Rules of the add/edit user forms.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_user(name: &str, email: &str, department: &str) -> Result<(), FieldErrors> {
    FormCheck::new()
        .required("name", name, "Name is required")
        .email("email", email)
        .required("department", department, "Department is required")
        .finish()
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
