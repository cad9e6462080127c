//! Tracing backend setup for the default sink
//!
//! Records sent to `TracingSink` become `tracing` events with target
//! `neoma`. This module provides:
//! - Single initialization point via `init(profile)`
//! - Test capture mode for asserting on forwarded events
//!
//! # Usage
//!
//! ```rust
//! use neoma_logging::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
