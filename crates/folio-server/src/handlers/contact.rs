//! Contact form API endpoint.
//!
//! Validates the submission and returns a canned acknowledgement; there is
//! no delivery backend.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Contact form submission body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ContactForm {
    /// Sender name.
    name: String,
    /// Sender email address.
    email: String,
    /// Message body.
    message: String,
}

impl ContactForm {
    /// All three fields must be present and non-empty.
    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Acknowledgement body for an accepted submission.
#[derive(Serialize)]
pub(crate) struct ContactResponse {
    /// Always `"ok"`.
    status: &'static str,
    /// Human-readable acknowledgement.
    message: &'static str,
}

/// Handle POST /api/contact.
pub(crate) async fn submit_contact(
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactResponse>), ServerError> {
    if !form.is_complete() {
        return Err(ServerError::MissingContactFields);
    }

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            status: "ok",
            message: "Thanks for reaching out — your note is en route!",
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn test_complete_form() {
        assert!(form("Ada", "ada@example.com", "Hello").is_complete());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(!form("", "ada@example.com", "Hello").is_complete());
        assert!(!form("Ada", "", "Hello").is_complete());
        assert!(!form("Ada", "ada@example.com", "").is_complete());
    }

    #[test]
    fn test_form_deserialization_defaults_missing_fields() {
        let form: ContactForm = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(form.name, "Ada");
        assert!(form.email.is_empty());
        assert!(!form.is_complete());
    }

    #[test]
    fn test_response_serialization() {
        let response = ContactResponse {
            status: "ok",
            message: "Thanks for reaching out — your note is en route!",
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["message"].as_str().unwrap().starts_with("Thanks"));
    }
}
