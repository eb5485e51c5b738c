use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(ContactField),
}

/// Current contents of the contact form inputs. A field the user never
/// touched is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        if let Some(field) = self.missing_fields().into_iter().next() {
            return Err(FormError::MissingField(field));
        }
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

/// A validated contact request, handed to a sink once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Receives validated submissions.
pub trait SubmissionSink {
    fn record(&self, submission: ContactSubmission);
}

/// Writes each submission to the console log.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn record(&self, submission: ContactSubmission) {
        match serde_json::to_string(&submission) {
            Ok(json) => info!("Contact form submitted: {}", json),
            Err(e) => warn!("Contact form submitted but could not be serialized: {}", e),
        }
    }
}

impl SubmissionSink for Callback<ContactSubmission> {
    fn record(&self, submission: ContactSubmission) {
        self.emit(submission);
    }
}

pub fn submit<S: SubmissionSink + ?Sized>(fields: &ContactFields, sink: &S) -> Result<(), FormError> {
    let submission = fields.validate()?;
    sink.record(submission);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<ContactSubmission>>,
    }

    impl SubmissionSink for RecordingSink {
        fn record(&self, submission: ContactSubmission) {
            self.received.borrow_mut().push(submission);
        }
    }

    fn jane() -> ContactFields {
        ContactFields {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_submit_complete_form_records_once() {
        let sink = RecordingSink::default();
        assert_eq!(submit(&jane(), &sink), Ok(()));

        let received = sink.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            ContactSubmission {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                message: "Hello".to_string(),
            }
        );
    }

    #[test]
    fn test_submit_with_empty_field_records_nothing() {
        for field in ContactField::ALL {
            let mut fields = jane();
            fields.set(field, String::new());
            let sink = RecordingSink::default();

            assert_eq!(submit(&fields, &sink), Err(FormError::MissingField(field)));
            assert!(sink.received.borrow().is_empty());
        }
    }

    #[test]
    fn test_untouched_form_reports_first_missing_field() {
        let fields = ContactFields::default();
        assert_eq!(fields.validate(), Err(FormError::MissingField(ContactField::Name)));
        assert_eq!(fields.missing_fields(), ContactField::ALL.to_vec());
    }

    #[test]
    fn test_no_email_format_check() {
        let mut fields = jane();
        fields.set(ContactField::Email, "not an address".to_string());
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_submit_leaves_fields_untouched() {
        let fields = jane();
        submit(&fields, &LogSink).unwrap();
        assert_eq!(fields, jane());
    }

    #[test]
    fn test_callback_sink_emits_submission() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let received = received.clone();
            Callback::from(move |submission: ContactSubmission| {
                received.borrow_mut().push(submission);
            })
        };

        submit(&jane(), &sink).unwrap();
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(received.borrow()[0].email, "jane@example.com");
    }

    #[test]
    fn test_error_display() {
        let err = FormError::MissingField(ContactField::Email);
        assert_eq!(err.to_string(), "missing required field: email");
    }
}
