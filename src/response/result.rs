//! Explicit partial JSON results.
//!
//! A handler that wants partial-response filtering on a specific response,
//! whatever its status, returns a [`PartialJsonResult`] and hands it to
//! [`PartialJsonFormatter::execute`](super::PartialJsonFormatter::execute).

use crate::document::node::TreeValue;
use http::header::HeaderValue;
use http::StatusCode;

/// A value to be written as JSON, pruned to the request's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialJsonResult {
    pub value: TreeValue,
    /// Status to respond with; the response's own status is kept when unset.
    pub status: Option<StatusCode>,
    /// Content type; takes precedence over the response's own.
    pub content_type: Option<HeaderValue>,
}

impl PartialJsonResult {
    pub fn new(value: TreeValue) -> Self {
        Self {
            value,
            status: None,
            content_type: None,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_content_type(mut self, content_type: HeaderValue) -> Self {
        self.content_type = Some(content_type);
        self
    }
}

impl From<TreeValue> for PartialJsonResult {
    fn from(value: TreeValue) -> Self {
        Self::new(value)
    }
}
