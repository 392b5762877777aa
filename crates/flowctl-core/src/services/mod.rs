//! Pipeline stages and the pipeline service composing them.
//!
//! Each stage is a free function over domain types so it can be tested in
//! isolation; [`CommandPipeline`] wires them together with the ports.

pub mod binding;
pub mod confirmation;
pub mod error_translation;
mod pipeline;
pub mod projection;
pub mod request_builder;

pub use binding::bind;
pub use confirmation::GateDecision;
pub use pipeline::{CommandPipeline, Outcome, PipelineOptions};
pub use projection::project;
pub use request_builder::build_request;
