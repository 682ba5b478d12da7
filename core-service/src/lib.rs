//! # Beacon command dispatcher
//!
//! This crate wires a host-provided vendor SDK adapter ([`bridge_traits::BeaconSdk`])
//! into the asynchronous command surface presented to script-level callers:
//! `open`, `identify`, `logout`, `register_push_notification_token`,
//! `suggest`, `navigate`, `search`, `prefill_contact_form`,
//! `reset_contact_form`, and `reset_prefilled_form`.
//!
//! ## Execution model
//!
//! Every SDK-mutating call is marshaled onto a single UI-owning scheduler
//! task, in post order. Operations resolve as soon as their job is accepted
//! by the scheduler — callers can rely on "accepted and dispatched", and must
//! not expect UI-level completion. No cancellation, no timeouts, no retries.
//!
//! ## State
//!
//! The only durable state is the one-slot prefill store
//! ([`prefill::PrefillSlot`]), read by the vendor SDK's own form-population
//! callback through [`BeaconService::prefill_source`].
//!
//! ## Linking
//!
//! Built without an adapter, the service fails every operation with a
//! `linking-error` that includes remediation steps.

pub mod error;
pub mod prefill;
mod scheduler;
mod service;

pub use error::{BeaconError, Result};
pub use prefill::PrefillSlot;
pub use service::{BeaconService, BeaconServiceBuilder};
