//! Suggested-content mapping for the Beacon suggest call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::error::{ModelError, Result};

/// A single suggested item, discriminated by the script-side `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Suggestion {
    /// External link with a display label.
    Link {
        #[serde(rename = "link")]
        url: Url,
        label: String,
    },
    /// Docs article referenced by its identifier.
    Article {
        #[serde(rename = "articleId")]
        article_id: String,
    },
}

/// Map a batch of raw suggestion entries.
///
/// Each entry is validated independently. Entries missing the required fields
/// for their declared type are dropped from the result; their slot in the
/// batch does not shift the order of the surviving entries. A `type` value
/// outside `link`/`article` fails the entire call.
pub fn decode_suggestions(raw: &[Value]) -> Result<Vec<Suggestion>> {
    let mut suggestions = Vec::with_capacity(raw.len());

    for (index, entry) in raw.iter().enumerate() {
        let Some(object) = entry.as_object() else {
            warn!(index, "Dropped suggestion: not an object");
            continue;
        };
        let Some(kind) = object.get("type").and_then(Value::as_str) else {
            warn!(index, "Dropped suggestion: missing type");
            continue;
        };

        match kind {
            "link" => {
                let url = object
                    .get("link")
                    .and_then(Value::as_str)
                    .and_then(|s| Url::parse(s).ok());
                let label = object.get("label").and_then(Value::as_str);

                match (url, label) {
                    (Some(url), Some(label)) => suggestions.push(Suggestion::Link {
                        url,
                        label: label.to_owned(),
                    }),
                    _ => warn!(index, "Dropped link suggestion: missing url or label"),
                }
            }
            "article" => match object.get("articleId").and_then(Value::as_str) {
                Some(article_id) => suggestions.push(Suggestion::Article {
                    article_id: article_id.to_owned(),
                }),
                None => warn!(index, "Dropped article suggestion: missing articleId"),
            },
            other => {
                return Err(ModelError::UnrecognizedValue {
                    field: "suggestion type",
                    value: other.to_owned(),
                })
            }
        }
    }

    Ok(suggestions)
}
