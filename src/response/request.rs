//! Per-request access to the caller's fields selector.

use crate::fields::{parse_selector, ParseOutcome};
use std::cell::OnceCell;

/// The fields selector carried by one request.
///
/// The selector is parsed on first use and the outcome is kept for the
/// rest of the request, so every consumer sees the same result.
#[derive(Debug, Default)]
pub struct RequestFields {
    raw: Option<String>,
    bypassed: bool,
    outcome: OnceCell<ParseOutcome>,
}

impl RequestFields {
    /// Wraps an already-extracted selector. `None` means none was supplied.
    pub fn new(raw: Option<String>) -> Self {
        Self {
            raw,
            bypassed: false,
            outcome: OnceCell::new(),
        }
    }

    /// Extracts the first `param_name` parameter from a raw query string.
    ///
    /// The value is percent-decoded. A parameter present without a value
    /// (`?fields` or `?fields=`) is an empty selector, not an absent one.
    ///
    /// ```
    /// use fieldquill::response::RequestFields;
    ///
    /// let request = RequestFields::from_query(Some("page=2&fields=a%2Fb,c"), "fields");
    /// assert_eq!(request.raw(), Some("a/b,c"));
    ///
    /// let request = RequestFields::from_query(Some("page=2"), "fields");
    /// assert_eq!(request.raw(), None);
    /// ```
    pub fn from_query(query: Option<&str>, param_name: &str) -> Self {
        let raw = query.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(name, _)| name == param_name)
                .map(|(_, value)| value.into_owned())
        });
        Self::new(raw)
    }

    /// Extracts the selector from the request's query string.
    pub fn from_request<B>(request: &http::Request<B>, param_name: &str) -> Self {
        Self::from_query(request.uri().query(), param_name)
    }

    /// The selector text as supplied, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Parses the selector once and returns the memoized outcome.
    pub fn outcome(&self) -> &ParseOutcome {
        self.outcome
            .get_or_init(|| parse_selector(self.raw.as_deref()))
    }

    /// Returns true once `outcome` has been computed.
    pub fn is_parsed(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// Disables partial response for this request; the body is sent whole.
    pub fn bypass(&mut self) {
        self.bypassed = true;
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }
}
