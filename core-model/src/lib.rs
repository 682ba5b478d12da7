//! # Beacon Value Model
//!
//! Typed value objects for the Beacon bridge plus the mapping layer that
//! builds them from untyped script input (`serde_json::Value`).
//!
//! ## Overview
//!
//! Script callers hand the bridge plain data objects. This crate performs the
//! pure, synchronous translation into the typed records the vendor SDK seam
//! consumes; it never invokes the SDK itself. Decoding is schema-driven: each
//! step returns the typed record plus the list of input keys it did not
//! recognize, so lenient field handling stays observable.
//!
//! ## Validation posture
//!
//! - `beaconId` is the only required settings field; its absence fails the
//!   call before anything else happens.
//! - Optional fields that are missing or of the wrong JSON shape are silently
//!   left at SDK defaults.
//! - Enumerated literals (`focusMode`, route names, suggestion `type`) that
//!   are present but unrecognized fail the whole call with a catchable
//!   `fatal-configuration-error`.
//! - Malformed colors fall back to mid-gray; malformed suggestion entries are
//!   dropped from the batch.
//!
//! Platform divergence (iOS vs. Android field support) is confined to
//! [`settings::SettingsMapper`] and its two implementations.

pub mod color;
pub mod decode;
pub mod error;
pub mod form;
pub mod identity;
pub mod route;
pub mod settings;
pub mod suggestion;

pub use color::Color;
pub use decode::{Decoded, ObjectReader};
pub use error::{ModelError, Result};
pub use form::{decode_prefill_form, PrefillForm};
pub use identity::{decode_identity, BeaconIdentity};
pub use route::BeaconRoute;
pub use settings::{AndroidMapper, BeaconSettings, FocusMode, IosMapper, Platform, SettingsMapper};
pub use suggestion::{decode_suggestions, Suggestion};
