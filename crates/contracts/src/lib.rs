//! Shared types for the news admin console.
//!
//! Everything here is target-independent: record types, resource descriptors,
//! the page state machine and configuration. The `frontend` crate renders
//! and drives these types in the browser.

pub mod domain;
pub mod shared;
