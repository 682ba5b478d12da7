//! # Beacon Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the command dispatcher and the
//! platform-specific vendor SDK adapters. The dispatcher never touches the
//! vendor SDK directly; it schedules calls against [`BeaconSdk`](sdk::BeaconSdk)
//! on the single UI-owning execution context.
//!
//! ## Traits
//!
//! - [`BeaconSdk`](sdk::BeaconSdk) - Vendor SDK entry points (open, identify,
//!   navigate, search, suggest, push token registration, resets)
//! - [`PrefillSource`](prefill::PrefillSource) - Read seam for the SDK's own
//!   contact-form population callback
//!
//! ## Platform Requirements
//!
//! Each supported platform ships a concrete `BeaconSdk` adapter wrapping its
//! vendor SDK distribution:
//!
//! | Platform | Vendor SDK entry points |
//! |----------|-------------------------|
//! | iOS      | `HSBeacon` class methods |
//! | Android  | `Beacon` / `BeaconActivity` |
//!
//! ## Fail-Fast Strategy
//!
//! When no adapter is installed, the dispatcher fails every operation with a
//! descriptive linking error rather than silently no-op-ing. Adapters should
//! convert platform failures to [`BridgeError`](error::BridgeError) with
//! actionable messages.
//!
//! ## Thread Safety
//!
//! `BeaconSdk` and `PrefillSource` require `Send + Sync`: the trait objects
//! are handed to the scheduler task and, for the prefill source, to whatever
//! thread the vendor SDK fires its callback on. Method bodies themselves are
//! only ever entered from the scheduler task (or the SDK callback, for
//! prefill reads).

pub mod error;
pub mod prefill;
pub mod sdk;

pub use error::{BridgeError, Result};
pub use prefill::PrefillSource;
pub use sdk::BeaconSdk;
