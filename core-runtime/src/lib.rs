//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the Beacon bridge:
//! - Logging and tracing configuration
//! - Runtime error type
//!
//! ## Overview
//!
//! This crate establishes the logging conventions used throughout the
//! workspace. Host applications initialize it once at startup; the other
//! crates only emit `tracing` events and stay agnostic of the subscriber
//! setup.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
