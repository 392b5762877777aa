//! Presentation helpers for CLI output.
//!
//! Command output goes to stdout; everything meant for the human at the
//! terminal (notes, cancellation messages) goes to stderr.

pub mod output;
pub mod tables;

pub use output::{dry_run_document, render_outcome, render_value};
pub use tables::{separator, truncate_string};
