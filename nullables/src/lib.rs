//! Nullable infrastructure for deterministic testing.
//!
//! The token's only outside dependencies are the time of a call and the
//! native-currency transfers its rebates make. This crate provides
//! test-friendly stand-ins that:
//! - return deterministic values
//! - can be controlled programmatically
//! - record what happened for assertions

pub mod bank;
pub mod clock;

pub use bank::NullNativeBank;
pub use clock::NullClock;
