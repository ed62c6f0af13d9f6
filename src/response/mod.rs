//! Partial responses for HTTP APIs.
//!
//! [`RequestFields`] pulls the selector out of a request's query string,
//! and [`PartialJsonFormatter`] writes the response body pruned to it, either
//! from a framework response or from an explicit [`PartialJsonResult`].

pub mod formatter;
pub mod request;
pub mod result;

pub use formatter::{PartialJsonFormatter, ResponseError, JSON_CONTENT_TYPE};
pub use request::RequestFields;
pub use result::PartialJsonResult;
