//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates. Host applications can depend on `beacon-bridge` with the
//! default `service` feature enabled and reach the command dispatcher without
//! wiring each crate individually.

#[cfg(feature = "service")]
pub use core_service;
