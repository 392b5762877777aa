//! Core domain types.
//!
//! These types describe operations and the data flowing through one
//! invocation, independent of any transport or terminal concerns.
//!
//! # Structure
//!
//! - `schema` - Static operation descriptions (`OperationSpec`, `FieldSpec`)
//! - `value` - Typed parameter values and their parsing
//! - `selector` - Output selection rules
//! - `context` - Raw inputs, client settings, bound invocation state
//! - `request` / `response` - The request built and the response received

mod context;
mod request;
mod response;
pub mod schema;
mod selector;
mod value;

pub use context::{ClientSettings, InvocationContext, StaticCredentials, SuppliedParams};
pub use request::Request;
pub use response::{InvocationLog, InvocationRecord, Projection, Response};
pub use schema::{
    FieldDefault, FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec,
    Service, Verb,
};
pub use selector::Selector;
pub use value::ParamValue;
