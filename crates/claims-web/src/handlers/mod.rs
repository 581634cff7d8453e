//! Route handlers, one module per page or action.
//!
//! Handlers either render a view or answer with a single `303 See Other`
//! redirect; failures surface as [`Error`](crate::Error) responses.

pub mod cancel;
pub mod comment;
pub mod create;
pub mod delete;
pub mod list;
pub mod status;
