//! Contact form validation and the simulated send.

use std::error::Error;
use std::fmt;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const SENT: &str = "Message sent successfully!";
pub const SENDING_LABEL: &str = "Sending...";

/// Raw field values as read from the form. `None` means the field is absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// At least one field is empty or missing; names the first one.
    MissingField(&'static str),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(_) => f.write_str(MISSING_FIELDS),
        }
    }
}

impl Error for FormError {}

fn required(value: &Option<String>, name: &'static str) -> Result<String, FormError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(FormError::MissingField(name)),
    }
}

impl ContactFields {
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        Ok(ContactMessage {
            name: required(&self.name, "name")?,
            email: required(&self.email, "email")?,
            subject: required(&self.subject, "subject")?,
            message: required(&self.message, "message")?,
        })
    }
}

/// Submit control state across a simulated send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending { original_label: String },
}

impl SubmitState {
    /// Enters `Sending`, remembering `label`. Returns `false` (and changes
    /// nothing) while a send is already in flight.
    pub fn begin(&mut self, label: String) -> bool {
        if self.is_sending() {
            return false;
        }
        *self = SubmitState::Sending { original_label: label };
        true
    }

    /// Leaves `Sending`, yielding the label to restore.
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::replace(self, SubmitState::Idle) {
            SubmitState::Sending { original_label } => Some(original_label),
            SubmitState::Idle => None,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitState::Sending { .. })
    }
}
