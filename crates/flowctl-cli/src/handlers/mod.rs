//! Command handlers.
//!
//! Each handler is a thin adapter from parsed arguments to the pipeline
//! or the catalog, with output delegated to [`crate::presentation`].

pub mod invoke;
pub mod list;
