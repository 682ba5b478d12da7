//! Beacon settings mapping.
//!
//! The settings object is the one place where the two mobile platforms
//! diverge: they share the common field set but each supports a handful of
//! exclusive fields. The divergence lives behind [`SettingsMapper`], with one
//! implementation per platform; everything else in the bridge is
//! platform-agnostic.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Color;
use crate::decode::{Decoded, ObjectReader};
use crate::error::{ModelError, Result};
use crate::identity::{decode_identity, BeaconIdentity};

/// Widget display mode controlling which contact options are emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusMode {
    Neutral,
    SelfService,
    AskFirst,
}

impl FocusMode {
    /// Parse a script-side focus mode literal.
    ///
    /// Optional fields are lenient throughout the settings schema, but a
    /// focus mode that is present and unrecognized fails the whole operation.
    /// The asymmetry is deliberate and mirrors the native bridges.
    pub fn parse(raw: &str) -> Result<FocusMode> {
        match raw {
            "neutral" => Ok(FocusMode::Neutral),
            "self-service" => Ok(FocusMode::SelfService),
            "ask-first" => Ok(FocusMode::AskFirst),
            other => Err(ModelError::UnrecognizedValue {
                field: "focusMode",
                value: other.to_owned(),
            }),
        }
    }
}

/// Host platform whose settings mapper should be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// The settings mapper for this platform.
    pub fn mapper(self) -> &'static dyn SettingsMapper {
        match self {
            Platform::Ios => &IosMapper,
            Platform::Android => &AndroidMapper,
        }
    }
}

/// Typed Beacon configuration consumed by the vendor SDK.
///
/// Only `beacon_id` is required. Unset optional fields leave the SDK at its
/// own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconSettings {
    pub beacon_id: String,
    pub identity: Option<BeaconIdentity>,

    pub docs_enabled: Option<bool>,
    pub messaging_enabled: Option<bool>,
    pub chat_enabled: Option<bool>,
    pub focus_mode: Option<FocusMode>,
    pub color: Option<Color>,
    pub enable_previous_messages: Option<bool>,

    // Android only
    pub logs_enabled: Option<bool>,

    // iOS only
    pub beacon_title: Option<String>,
    pub tint_color_override: Option<Color>,
    pub use_local_translation_overrides: Option<bool>,
    pub use_navigation_bar_appearance: Option<bool>,
}

impl BeaconSettings {
    fn new(beacon_id: String) -> BeaconSettings {
        BeaconSettings {
            beacon_id,
            identity: None,
            docs_enabled: None,
            messaging_enabled: None,
            chat_enabled: None,
            focus_mode: None,
            color: None,
            enable_previous_messages: None,
            logs_enabled: None,
            beacon_title: None,
            tint_color_override: None,
            use_local_translation_overrides: None,
            use_navigation_bar_appearance: None,
        }
    }
}

/// Platform-specific settings mapper.
///
/// Both implementations run the shared field pass and then pick up the fields
/// exclusive to their platform; fields of the other platform end up in the
/// ignored-keys list of the [`Decoded`] result.
pub trait SettingsMapper: Send + Sync {
    fn platform(&self) -> Platform;

    /// Map untyped script input to typed settings.
    ///
    /// Fails when `beaconId` is absent or when `focusMode` carries an
    /// unrecognized literal; every other field is copied only if present and
    /// of the expected shape.
    fn decode(&self, raw: &Value) -> Result<Decoded<BeaconSettings>>;
}

fn decode_common(reader: &mut ObjectReader<'_>) -> Result<BeaconSettings> {
    let beacon_id = reader
        .opt_str("beaconId")
        .ok_or(ModelError::MissingField { field: "beaconId" })?;

    let mut settings = BeaconSettings::new(beacon_id.to_owned());
    settings.identity = reader.opt_value("identity").and_then(decode_identity);
    settings.docs_enabled = reader.opt_bool("docsEnabled");
    settings.messaging_enabled = reader.opt_bool("messagingEnabled");
    settings.chat_enabled = reader.opt_bool("chatEnabled");
    settings.enable_previous_messages = reader.opt_bool("enablePreviousMessages");
    settings.color = reader.opt_str("color").map(Color::from_hex);

    if let Some(raw_mode) = reader.opt_str("focusMode") {
        settings.focus_mode = Some(FocusMode::parse(raw_mode)?);
    }

    Ok(settings)
}

/// Settings mapper for iOS hosts.
pub struct IosMapper;

impl SettingsMapper for IosMapper {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn decode(&self, raw: &Value) -> Result<Decoded<BeaconSettings>> {
        let mut reader = ObjectReader::new(raw)
            .ok_or_else(|| ModelError::Validation("settings must be an object".to_owned()))?;

        let mut settings = decode_common(&mut reader)?;
        settings.beacon_title = reader.opt_str("beaconTitle").map(str::to_owned);
        settings.tint_color_override = reader.opt_str("tintColorOverride").map(Color::from_hex);
        settings.use_local_translation_overrides = reader.opt_bool("useLocalTranslationOverrides");
        settings.use_navigation_bar_appearance = reader.opt_bool("useNavigationBarAppearance");

        Ok(Decoded {
            value: settings,
            ignored_keys: reader.into_ignored(),
        })
    }
}

/// Settings mapper for Android hosts.
pub struct AndroidMapper;

impl SettingsMapper for AndroidMapper {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn decode(&self, raw: &Value) -> Result<Decoded<BeaconSettings>> {
        let mut reader = ObjectReader::new(raw)
            .ok_or_else(|| ModelError::Validation("settings must be an object".to_owned()))?;

        let mut settings = decode_common(&mut reader)?;
        settings.logs_enabled = reader.opt_bool("logsEnabled");
        // The Android SDK config treats previous messages as enabled unless
        // told otherwise.
        settings.enable_previous_messages = settings.enable_previous_messages.or(Some(true));

        Ok(Decoded {
            value: settings,
            ignored_keys: reader.into_ignored(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_beacon_id_fails() {
        let raw = json!({ "docsEnabled": true });
        for platform in [Platform::Ios, Platform::Android] {
            let err = platform.mapper().decode(&raw).unwrap_err();
            assert_eq!(err.code(), "missing-required-argument");
        }
    }

    #[test]
    fn test_minimal_settings() {
        let decoded = Platform::Ios
            .mapper()
            .decode(&json!({ "beaconId": "b-1" }))
            .unwrap();

        assert_eq!(decoded.value.beacon_id, "b-1");
        assert_eq!(decoded.value.docs_enabled, None);
        assert_eq!(decoded.value.focus_mode, None);
        assert!(decoded.ignored_keys.is_empty());
    }

    #[test]
    fn test_common_fields() {
        let decoded = Platform::Ios
            .mapper()
            .decode(&json!({
                "beaconId": "b-1",
                "docsEnabled": true,
                "messagingEnabled": false,
                "chatEnabled": true,
                "enablePreviousMessages": false,
                "color": "#336699",
                "focusMode": "self-service"
            }))
            .unwrap();

        let settings = decoded.value;
        assert_eq!(settings.docs_enabled, Some(true));
        assert_eq!(settings.messaging_enabled, Some(false));
        assert_eq!(settings.chat_enabled, Some(true));
        assert_eq!(settings.enable_previous_messages, Some(false));
        assert_eq!(
            settings.color,
            Some(Color {
                r: 0x33,
                g: 0x66,
                b: 0x99
            })
        );
        assert_eq!(settings.focus_mode, Some(FocusMode::SelfService));
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let decoded = Platform::Android
            .mapper()
            .decode(&json!({ "beaconId": "b-1", "color": "bluish" }))
            .unwrap();
        assert_eq!(decoded.value.color, Some(Color::GRAY));
    }

    #[test]
    fn test_unrecognized_focus_mode_is_fatal() {
        let raw = json!({ "beaconId": "b-1", "focusMode": "zen" });
        let err = Platform::Ios.mapper().decode(&raw).unwrap_err();
        assert_eq!(err.code(), "fatal-configuration-error");
    }

    #[test]
    fn test_mistyped_optional_field_is_skipped() {
        // Lenient on shape mismatches, fatal only on enum mismatches.
        let decoded = Platform::Ios
            .mapper()
            .decode(&json!({ "beaconId": "b-1", "docsEnabled": "yes" }))
            .unwrap();
        assert_eq!(decoded.value.docs_enabled, None);
    }

    #[test]
    fn test_ios_exclusive_fields() {
        let decoded = Platform::Ios
            .mapper()
            .decode(&json!({
                "beaconId": "b-1",
                "beaconTitle": "Support",
                "tintColorOverride": "00FF00",
                "useLocalTranslationOverrides": true,
                "useNavigationBarAppearance": false,
                "logsEnabled": true
            }))
            .unwrap();

        assert_eq!(decoded.value.beacon_title.as_deref(), Some("Support"));
        assert_eq!(
            decoded.value.tint_color_override,
            Some(Color { r: 0, g: 255, b: 0 })
        );
        assert_eq!(decoded.value.use_local_translation_overrides, Some(true));
        assert_eq!(decoded.value.use_navigation_bar_appearance, Some(false));
        // Android-only field is not mapped on iOS and surfaces as ignored.
        assert_eq!(decoded.value.logs_enabled, None);
        assert_eq!(decoded.ignored_keys, vec!["logsEnabled".to_owned()]);
    }

    #[test]
    fn test_android_exclusive_fields_and_default() {
        let decoded = Platform::Android
            .mapper()
            .decode(&json!({
                "beaconId": "b-1",
                "logsEnabled": true,
                "beaconTitle": "Support"
            }))
            .unwrap();

        assert_eq!(decoded.value.logs_enabled, Some(true));
        // Previous messages default on when unspecified (Android SDK default).
        assert_eq!(decoded.value.enable_previous_messages, Some(true));
        assert_eq!(decoded.value.beacon_title, None);
        assert_eq!(decoded.ignored_keys, vec!["beaconTitle".to_owned()]);
    }

    #[test]
    fn test_embedded_identity() {
        let decoded = Platform::Ios
            .mapper()
            .decode(&json!({
                "beaconId": "b-1",
                "identity": { "email": "a@x.com" }
            }))
            .unwrap();

        let identity = decoded.value.identity.unwrap();
        assert_eq!(identity.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_unknown_keys_are_collected() {
        let decoded = Platform::Android
            .mapper()
            .decode(&json!({ "beaconId": "b-1", "theme": "dark" }))
            .unwrap();
        assert_eq!(decoded.ignored_keys, vec!["theme".to_owned()]);
    }

    #[test]
    fn test_non_object_settings_fail() {
        let err = Platform::Ios.mapper().decode(&json!(17)).unwrap_err();
        assert_eq!(err.code(), "validation-failure");
    }
}
