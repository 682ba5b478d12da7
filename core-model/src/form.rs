//! Contact form prefill snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::decode::ObjectReader;
use crate::error::{ModelError, Result};

/// A snapshot of contact form values to pre-populate before the user sees the
/// form.
///
/// The vendor SDK reads the last-set snapshot through its own form-population
/// callback, at a time the bridge does not control. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefillForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    /// Custom field values keyed by the numeric field id.
    pub custom_field_values: HashMap<i64, String>,
    /// Attachment paths or URIs handed through to the SDK untouched.
    pub attachments: Vec<String>,
}

/// Decode a prefill snapshot from untyped script input.
///
/// Custom field keys must be decimal integer strings; entries with
/// non-numeric keys or non-string values are skipped.
pub fn decode_prefill_form(raw: &Value) -> Result<PrefillForm> {
    let mut reader = ObjectReader::new(raw)
        .ok_or_else(|| ModelError::Validation("form data must be an object".to_owned()))?;

    let mut form = PrefillForm {
        name: reader.opt_str("name").map(str::to_owned),
        email: reader.opt_str("email").map(str::to_owned),
        subject: reader.opt_str("subject").map(str::to_owned),
        message: reader.opt_str("message").map(str::to_owned),
        ..PrefillForm::default()
    };

    if let Some(custom) = reader.opt_object("customFieldValues") {
        for (key, value) in custom {
            match (key.parse::<i64>(), value.as_str()) {
                (Ok(field_id), Some(value)) => {
                    form.custom_field_values.insert(field_id, value.to_owned());
                }
                _ => warn!(key = %key, "Skipped custom field with non-numeric id or non-string value"),
            }
        }
    }

    if let Some(attachments) = reader.opt_array("attachments") {
        form.attachments = attachments
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect();
    }

    let ignored = reader.into_ignored();
    if !ignored.is_empty() {
        debug!(keys = ?ignored, "Ignored unknown form fields");
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_fields() {
        let form = decode_prefill_form(&json!({
            "name": "A",
            "email": "a@x.com",
            "subject": "Hello",
            "message": "Need help",
            "customFieldValues": { "12": "blue", "nope": "x", "13": 7 },
            "attachments": ["file:///tmp/log.txt", 3]
        }))
        .unwrap();

        assert_eq!(form.name.as_deref(), Some("A"));
        assert_eq!(form.subject.as_deref(), Some("Hello"));
        assert_eq!(form.custom_field_values.len(), 1);
        assert_eq!(
            form.custom_field_values.get(&12).map(String::as_str),
            Some("blue")
        );
        assert_eq!(form.attachments, vec!["file:///tmp/log.txt".to_owned()]);
    }

    #[test]
    fn test_empty_form_is_valid() {
        assert_eq!(decode_prefill_form(&json!({})).unwrap(), PrefillForm::default());
    }

    #[test]
    fn test_non_object_input_fails() {
        let err = decode_prefill_form(&json!("name=A")).unwrap_err();
        assert_eq!(err.code(), "validation-failure");
    }
}
