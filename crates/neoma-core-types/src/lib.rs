//! Core types shared across the Neoma logging crates
//!
//! - **Levels**: `LogLevel` names and their numeric `Severity`
//! - **Schema constants**: canonical record field keys

pub mod level;
pub mod schema;

pub use level::{LogLevel, ParseLevelError, Severity};
