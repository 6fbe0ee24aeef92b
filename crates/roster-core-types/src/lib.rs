//! Core types shared across the roster facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! macros and by tests that assert on captured log events.

pub mod schema;
