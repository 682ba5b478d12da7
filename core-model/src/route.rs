//! Script route names resolved to Beacon screens.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Target screen for a Beacon navigate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeaconRoute {
    Home,
    /// Docs article screen; carries the article identifier.
    Article(String),
    /// Contact form ("ask with a message").
    AskMessage,
    /// Live chat ("ask with chat").
    AskChat,
    Ask,
    PreviousMessages,
}

impl BeaconRoute {
    /// Resolve a script-side route name.
    ///
    /// `article` is invalid without an article identifier; that and any
    /// unrecognized name are configuration errors on the calling side.
    pub fn resolve(name: &str, article_id: Option<&str>) -> Result<BeaconRoute> {
        match name {
            "home" => Ok(BeaconRoute::Home),
            "article" => match article_id {
                Some(id) => Ok(BeaconRoute::Article(id.to_owned())),
                None => Err(ModelError::Configuration(
                    "route `article` requires an articleId".to_owned(),
                )),
            },
            "contact" => Ok(BeaconRoute::AskMessage),
            "chat" => Ok(BeaconRoute::AskChat),
            "ask" => Ok(BeaconRoute::Ask),
            "previous-messages" => Ok(BeaconRoute::PreviousMessages),
            other => Err(ModelError::UnrecognizedValue {
                field: "route",
                value: other.to_owned(),
            }),
        }
    }
}
