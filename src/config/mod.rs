//! Extraction constants and CLI option types.
//!
//! This module provides:
//! - Open Graph vocabulary constants (namespace, default favicon, icon rels)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt};
