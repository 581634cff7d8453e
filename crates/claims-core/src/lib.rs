//! Core types and trait definitions for the claims tracker.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! and the web layer both depend on it.

pub mod claim;
pub mod error;
pub mod range;
pub mod store;

pub use error::{Error, Result};
