//! Contact form validation and simulated submission state.
//!
//! The form never reaches a server: a valid submission holds the submit
//! control in a loading state for a fixed delay, then resets.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

/// Class applied to the submit control while a submission is pending.
pub const LOADING_CLASS: &str = "loading";

/// Validation failures. `Display` is the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate raw field values in the order the form reports errors.
///
/// # Errors
///
/// [`FormError::MissingField`] if any field is empty, otherwise
/// [`FormError::InvalidEmailFormat`] if the email is not `local@domain.tld`-shaped.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, FormError> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmailFormat);
    }
    Ok(ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

/// Anything but `@` or JavaScript `\s`, which is Unicode `White_Space` without
/// U+0085 and with U+FEFF.
const NOT_SPACE_OR_AT: &str =
    r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    let pattern = format!("^{c}+@{c}+\\.{c}+$", c = NOT_SPACE_OR_AT);
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("email pattern failed to compile: {e}");
            None
        }
    }
});

/// `local@domain.tld` shape check, `^[^\s@]+@[^\s@]+\.[^\s@]+$` with browser
/// whitespace semantics.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(email))
}

/// Submit-control state for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pending: Option<ContactSubmission>,
}

impl ContactFormState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate and enter the loading state. On error nothing changes.
    ///
    /// # Errors
    ///
    /// Propagates the [`FormError`] from [`validate`].
    pub fn begin(&mut self, name: &str, email: &str, message: &str) -> Result<ContactSubmission, FormError> {
        let submission = validate(name, email, message)?;
        self.pending = Some(submission.clone());
        Ok(submission)
    }

    /// Leave the loading state after the simulated latency.
    pub fn finish(&mut self) -> Option<ContactSubmission> {
        self.pending.take()
    }
}
