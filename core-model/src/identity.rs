//! User identity mapping for Beacon identify calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::decode::ObjectReader;

/// A user identity forwarded to the vendor SDK's identify entry point.
///
/// No field is individually required at the mapping layer; an empty identity
/// is valid and leaves every field unset. A meaningful identify call needs an
/// email, but enforcing that is the SDK's business, not the bridge's.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconIdentity {
    pub email: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    /// Kept only when the raw string parses as a URL.
    pub avatar: Option<Url>,
    /// Free-form string attributes; non-string values are skipped.
    pub attributes: HashMap<String, String>,
}

/// Extract an identity from untyped script input.
///
/// Returns `None` when the input is not a JSON object; every individual field
/// is optional.
pub fn decode_identity(raw: &Value) -> Option<BeaconIdentity> {
    let mut reader = ObjectReader::new(raw)?;

    let mut identity = BeaconIdentity {
        email: reader.opt_str("email").map(str::to_owned),
        name: reader.opt_str("name").map(str::to_owned),
        company: reader.opt_str("company").map(str::to_owned),
        job_title: reader.opt_str("jobTitle").map(str::to_owned),
        avatar: reader.opt_str("avatar").and_then(|s| Url::parse(s).ok()),
        attributes: HashMap::new(),
    };

    if let Some(attributes) = reader.opt_object("attributes") {
        for (key, value) in attributes {
            if let Some(value) = value.as_str() {
                identity.attributes.insert(key.clone(), value.to_owned());
            }
        }
    }

    let ignored = reader.into_ignored();
    if !ignored.is_empty() {
        debug!(keys = ?ignored, "Ignored unknown identity fields");
    }

    Some(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_only_identity() {
        let identity = decode_identity(&json!({ "email": "a@x.com" })).unwrap();

        assert_eq!(identity.email.as_deref(), Some("a@x.com"));
        assert_eq!(identity.name, None);
        assert_eq!(identity.company, None);
        assert_eq!(identity.job_title, None);
        assert_eq!(identity.avatar, None);
        assert!(identity.attributes.is_empty());
    }

    #[test]
    fn test_empty_identity_is_valid() {
        let identity = decode_identity(&json!({})).unwrap();
        assert_eq!(identity, BeaconIdentity::default());
    }

    #[test]
    fn test_non_object_input_is_absent() {
        assert!(decode_identity(&json!(null)).is_none());
        assert!(decode_identity(&json!("a@x.com")).is_none());
    }

    #[test]
    fn test_full_identity() {
        let identity = decode_identity(&json!({
            "email": "dev@example.com",
            "name": "Dev",
            "company": "Example Inc",
            "jobTitle": "Engineer",
            "avatar": "https://example.com/a.png",
            "attributes": { "plan": "pro", "seats": 4 }
        }))
        .unwrap();

        assert_eq!(identity.name.as_deref(), Some("Dev"));
        assert_eq!(identity.job_title.as_deref(), Some("Engineer"));
        assert_eq!(
            identity.avatar.as_ref().map(Url::as_str),
            Some("https://example.com/a.png")
        );
        // Non-string attribute values are dropped.
        assert_eq!(identity.attributes.len(), 1);
        assert_eq!(identity.attributes.get("plan").map(String::as_str), Some("pro"));
    }

    #[test]
    fn test_unparseable_avatar_is_dropped() {
        let identity = decode_identity(&json!({ "avatar": "not a url" })).unwrap();
        assert_eq!(identity.avatar, None);
    }
}
