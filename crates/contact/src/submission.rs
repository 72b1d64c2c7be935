use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

/// A contact form submission as it travels over the wire.
///
/// Decoding never rejects a field: missing or `null` fields become empty
/// strings and any other non-string value is kept as its JSON text. The
/// endpoint relays whatever it receives and only the form controller
/// enforces completeness.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Submission {
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "lenient_text")]
    pub message: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Fails when any of the three fields is empty.
    pub fn ensure_complete(&self) -> folio_shared::Result<()> {
        self.validate()?;

        Ok(())
    }
}

/// Body returned by the endpoint once the relay accepted the message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    pub success: bool,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_submission_passes() {
        let submission = Submission::new("Jane Doe", "jane@example.com", "Hello");
        assert!(submission.ensure_complete().is_ok());
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        let cases = [
            Submission::new("", "jane@example.com", "Hello"),
            Submission::new("Jane Doe", "", "Hello"),
            Submission::new("Jane Doe", "jane@example.com", ""),
        ];

        for submission in cases {
            let err = submission.ensure_complete().unwrap_err();
            assert!(err.is_validation(), "{submission:?}");
        }
    }

    #[test]
    fn test_email_is_not_checked_beyond_emptiness() {
        let submission = Submission::new("Jane Doe", "not an address", "Hello");
        assert!(submission.ensure_complete().is_ok());
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let submission: Submission = serde_json::from_str(r#"{"name":"Jane Doe"}"#).unwrap();
        assert_eq!(submission, Submission::new("Jane Doe", "", ""));
    }

    #[test]
    fn test_non_string_fields_are_kept_as_text() {
        let submission: Submission =
            serde_json::from_str(r#"{"name":null,"email":42,"message":{"text":"Hi"}}"#).unwrap();

        assert_eq!(submission, Submission::new("", "42", r#"{"text":"Hi"}"#));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_str::<Submission>("name=Jane").is_err());
        assert!(serde_json::from_str::<Submission>(r#""Jane""#).is_err());
    }
}
