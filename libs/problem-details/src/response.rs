//! Response envelope handed to the HTTP serving layer.

use std::collections::HashMap;

use http::{
    header::{HeaderName, CONTENT_TYPE},
    HeaderMap, HeaderValue, StatusCode,
};
use serde_json::{Map, Value};

use crate::error::ProblemError;
use crate::problem::{build_problem_response, ProblemOptions};

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// A built Problem Details response.
///
/// `mimetype` and `content_type` are always [`APPLICATION_PROBLEM_JSON`]. `headers` is
/// exactly what the caller passed in.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ProblemResponse {
    pub status: i32,
    pub mimetype: &'static str,
    pub content_type: &'static str,
    pub body: Map<String, Value>,
    pub headers: Option<HashMap<String, String>>,
}

impl ProblemResponse {
    pub(crate) fn new(
        status: i32,
        body: Map<String, Value>,
        headers: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            status,
            mimetype: APPLICATION_PROBLEM_JSON,
            content_type: APPLICATION_PROBLEM_JSON,
            body,
            headers,
        }
    }

    /// JSON-encoded body.
    ///
    /// # Errors
    /// Returns [`ProblemError::Serialize`] if an extension value cannot be encoded.
    pub fn body_bytes(&self) -> Result<Vec<u8>, ProblemError> {
        Ok(serde_json::to_vec(&self.body)?)
    }

    /// The envelope status as an HTTP status code.
    ///
    /// # Errors
    /// Returns [`ProblemError::InvalidStatus`] outside `100..=999`.
    pub fn status_code(&self) -> Result<StatusCode, ProblemError> {
        u16::try_from(self.status)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .ok_or(ProblemError::InvalidStatus(self.status))
    }

    /// Strict conversion into an `http::Response`.
    ///
    /// Passthrough headers are applied first, then `Content-Type` is forced to
    /// `application/problem+json`.
    ///
    /// # Errors
    /// Fails on an invalid status, an invalid header name or value, or a body that does
    /// not encode.
    pub fn to_http(&self) -> Result<http::Response<Vec<u8>>, ProblemError> {
        let status = self.status_code()?;
        let mut resp = http::Response::new(self.body_bytes()?);
        *resp.status_mut() = status;

        let headers = resp.headers_mut();
        for (name, value) in self.headers.iter().flatten() {
            let (name, value) = parse_header(name, value)?;
            headers.append(name, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PROBLEM_JSON));
        Ok(resp)
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ProblemError> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| ProblemError::InvalidHeaderName {
            name: name.to_string(),
        })?;
    let header_value =
        HeaderValue::from_str(value).map_err(|_| ProblemError::InvalidHeaderValue {
            name: name.to_string(),
        })?;
    Ok((header_name, header_value))
}

/// Check whether a header map announces a Problem+JSON payload.
pub fn is_problem_response(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with(APPLICATION_PROBLEM_JSON))
}

/// Axum integration. Lenient where [`ProblemResponse::to_http`] is strict: an invalid
/// status becomes 500 and invalid headers are dropped, each with a warning.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ProblemResponse {
    fn into_response(self) -> axum::response::Response {
        use axum::response::IntoResponse;

        let status = self.status_code().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to 500 for problem response");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        let mut resp = axum::Json(self.body).into_response();
        *resp.status_mut() = status;

        let headers = resp.headers_mut();
        for (name, value) in self.headers.iter().flatten() {
            match parse_header(name, value) {
                Ok((name, value)) => {
                    headers.append(name, value);
                }
                Err(err) => tracing::warn!(error = %err, "dropping problem response header"),
            }
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PROBLEM_JSON));
        resp
    }
}

// Convenience constructors.
fn canonical(status: StatusCode, detail: impl Into<String>) -> ProblemResponse {
    build_problem_response(
        i32::from(status.as_u16()),
        status.canonical_reason().unwrap_or_default(),
        detail,
        ProblemOptions::default(),
    )
}

pub fn bad_request(detail: impl Into<String>) -> ProblemResponse {
    canonical(StatusCode::BAD_REQUEST, detail)
}

pub fn not_found(detail: impl Into<String>) -> ProblemResponse {
    canonical(StatusCode::NOT_FOUND, detail)
}

pub fn conflict(detail: impl Into<String>) -> ProblemResponse {
    canonical(StatusCode::CONFLICT, detail)
}

pub fn internal_error(detail: impl Into<String>) -> ProblemResponse {
    canonical(StatusCode::INTERNAL_SERVER_ERROR, detail)
}
