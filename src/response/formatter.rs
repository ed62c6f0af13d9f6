//! Response formatting with partial-response support.
//!
//! [`PartialJsonFormatter`] takes a structured response body and writes it
//! as JSON, pruned to the caller's selection when one applies.

use super::request::RequestFields;
use super::result::PartialJsonResult;
use crate::config::Config;
use crate::document::node::TreeValue;
use crate::fields::{AlwaysIncluded, FieldsError};
use crate::prune::apply_outcome;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Response, StatusCode};
use thiserror::Error;

/// Media type written when the response does not set one.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Errors raised while writing a response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes JSON response bodies, applying the request's fields selector.
///
/// The rules, in order:
///
/// 1. A bypassed request or a non-200 status is written unmodified, and
///    the selector is never parsed.
/// 2. A malformed selector turns the response into `400 Bad Request` with
///    an empty body, unless `ignore_parse_errors` is set, in which case the
///    body is written unfiltered.
/// 3. No selector writes the body unfiltered.
/// 4. A valid selector prunes the body, retaining always-included
///    properties.
///
/// # Example
///
/// ```
/// use fieldquill::config::Config;
/// use fieldquill::document::TreeValue;
/// use fieldquill::response::{PartialJsonFormatter, RequestFields};
/// use serde_json::json;
///
/// let formatter = PartialJsonFormatter::new(Config::default()).unwrap();
/// let request = RequestFields::from_query(Some("fields=a"), "fields");
/// let body = TreeValue::from(json!({"a": 1, "b": 2}));
///
/// let response = formatter
///     .format(&request, http::Response::new(body))
///     .unwrap();
/// assert_eq!(response.body(), br#"{"a":1}"#);
/// ```
#[derive(Debug, Clone)]
pub struct PartialJsonFormatter {
    config: Config,
    always_included: Option<AlwaysIncluded>,
}

impl PartialJsonFormatter {
    /// Builds a formatter, parsing the configured always-included selectors.
    pub fn new(config: Config) -> Result<Self, FieldsError> {
        let always_included = config.always_included()?;
        Ok(Self {
            config,
            always_included,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extracts the fields selector from a request using the configured
    /// parameter name.
    pub fn request_fields<B>(&self, request: &http::Request<B>) -> RequestFields {
        RequestFields::from_request(request, &self.config.fields_param_name)
    }

    /// Formats `response` for the request described by `fields`.
    pub fn format(
        &self,
        fields: &RequestFields,
        response: Response<TreeValue>,
    ) -> Result<Response<Vec<u8>>, ResponseError> {
        let (mut parts, body) = response.into_parts();

        if fields.is_bypassed() || parts.status != StatusCode::OK {
            let bytes = serde_json::to_vec(&body)?;
            set_default_content_type(&mut parts.headers);
            return Ok(Response::from_parts(parts, bytes));
        }

        let outcome = fields.outcome();
        if outcome.is_error() && !self.config.ignore_parse_errors {
            parts.status = StatusCode::BAD_REQUEST;
            return Ok(Response::from_parts(parts, Vec::new()));
        }

        // Absent and ignored-malformed outcomes pass through unfiltered
        let body = apply_outcome(
            body,
            outcome,
            self.config.case_sensitivity(),
            self.always_included.as_ref(),
        );

        let bytes = serde_json::to_vec(&body)?;
        set_default_content_type(&mut parts.headers);
        Ok(Response::from_parts(parts, bytes))
    }

    /// Writes an explicit result as a new response.
    ///
    /// Equivalent to [`execute_on`](Self::execute_on) with a default `200 OK`
    /// response.
    pub fn execute(
        &self,
        fields: &RequestFields,
        result: PartialJsonResult,
    ) -> Result<Response<Vec<u8>>, ResponseError> {
        self.execute_on(fields, result, Response::default())
    }

    /// Writes an explicit result onto `response`.
    ///
    /// Unlike [`format`](Self::format), the selector is always applied: a
    /// result is filtered whatever its status and bypass is not consulted.
    /// A malformed selector still yields `400 Bad Request` with an empty body
    /// unless `ignore_parse_errors` is set. The result's status replaces the
    /// response's when set. The content type is the result's, else the
    /// response's, else `application/json; charset=utf-8`.
    pub fn execute_on(
        &self,
        fields: &RequestFields,
        result: PartialJsonResult,
        response: Response<()>,
    ) -> Result<Response<Vec<u8>>, ResponseError> {
        let (mut parts, ()) = response.into_parts();

        let outcome = fields.outcome();
        if outcome.is_error() && !self.config.ignore_parse_errors {
            parts.status = StatusCode::BAD_REQUEST;
            return Ok(Response::from_parts(parts, Vec::new()));
        }

        if let Some(content_type) = result.content_type {
            parts.headers.insert(CONTENT_TYPE, content_type);
        }
        set_default_content_type(&mut parts.headers);
        if let Some(status) = result.status {
            parts.status = status;
        }

        log::debug!("Executing partial JSON result with status {}", parts.status);

        let body = apply_outcome(
            result.value,
            outcome,
            self.config.case_sensitivity(),
            self.always_included.as_ref(),
        );

        let bytes = serde_json::to_vec(&body)?;
        Ok(Response::from_parts(parts, bytes))
    }
}

fn set_default_content_type(headers: &mut http::HeaderMap) {
    headers
        .entry(CONTENT_TYPE)
        .or_insert(HeaderValue::from_static(JSON_CONTENT_TYPE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> TreeValue {
        TreeValue::from(json!({"a": {"b": 1, "c": 2}, "d": 3}))
    }

    #[test]
    fn test_bypass_skips_parsing() {
        let formatter = PartialJsonFormatter::new(Config::default()).unwrap();
        let mut fields = RequestFields::new(Some("a(".to_string()));
        fields.bypass();

        let response = formatter.format(&fields, Response::new(body())).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!fields.is_parsed());
    }

    #[test]
    fn test_non_ok_status_skips_parsing() {
        let formatter = PartialJsonFormatter::new(Config::default()).unwrap();
        let fields = RequestFields::new(Some("a".to_string()));
        let mut response = Response::new(body());
        *response.status_mut() = StatusCode::NOT_FOUND;

        let response = formatter.format(&fields, response).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!fields.is_parsed());
        let value: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(value, json!({"a": {"b": 1, "c": 2}, "d": 3}));
    }

    #[test]
    fn test_existing_content_type_is_kept() {
        let formatter = PartialJsonFormatter::new(Config::default()).unwrap();
        let fields = RequestFields::new(None);
        let mut response = Response::new(body());
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/vnd.api+json"),
        );

        let response = formatter.format(&fields, response).unwrap();
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "application/vnd.api+json"
        );
    }

    #[test]
    fn test_default_content_type() {
        let formatter = PartialJsonFormatter::new(Config::default()).unwrap();
        let fields = RequestFields::new(None);
        let response = formatter.format(&fields, Response::new(body())).unwrap();
        assert_eq!(response.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_execute_content_type_precedence() {
        let formatter = PartialJsonFormatter::new(Config::default()).unwrap();
        let fields = RequestFields::new(None);

        let mut response = Response::new(());
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        let from_response = formatter
            .execute_on(&fields, PartialJsonResult::new(body()), response)
            .unwrap();
        assert_eq!(
            from_response.headers()[CONTENT_TYPE],
            "application/problem+json"
        );

        let mut response = Response::new(());
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        let result = PartialJsonResult::new(body())
            .with_content_type(HeaderValue::from_static("application/vnd.api+json"));
        let from_result = formatter.execute_on(&fields, result, response).unwrap();
        assert_eq!(
            from_result.headers()[CONTENT_TYPE],
            "application/vnd.api+json"
        );

        let default = formatter
            .execute(&fields, PartialJsonResult::new(body()))
            .unwrap();
        assert_eq!(default.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_execute_ignores_bypass() {
        let formatter = PartialJsonFormatter::new(Config::default()).unwrap();
        let mut fields = RequestFields::new(Some("d".to_string()));
        fields.bypass();

        let response = formatter
            .execute(&fields, PartialJsonResult::new(body()))
            .unwrap();
        assert_eq!(response.body(), br#"{"d":3}"#);
    }
}
