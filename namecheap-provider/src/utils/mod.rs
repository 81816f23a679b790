//! Utility modules.

/// Offset and date parsing for provider timestamps.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
