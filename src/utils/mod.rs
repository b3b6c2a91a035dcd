//! Utility modules for the iTask application.
//!
//! - [`datetime`] - Deadline and clock formatting, ISO-8601 parsing, month arithmetic

pub mod datetime;
