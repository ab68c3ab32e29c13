//! RFC 9457 Problem Details body and the builder that turns caller arguments into a
//! [`ProblemResponse`].

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::response::ProblemResponse;

/// Problem type used when the caller gives none.
pub const ABOUT_BLANK: &str = "about:blank";

/// Typed Problem Details body.
///
/// The wire form is produced by [`ProblemDetails::into_body`]: the mandated members first,
/// then `extensions` merged on top. Extension members overwrite mandated ones on collision.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// The HTTP status code being reported. Not validated.
    pub status: i32,
    /// A URI reference that identifies the specific occurrence of the problem.
    pub instance: Option<String>,
    /// Additional members merged into the top level of the body.
    pub extensions: Map<String, Value>,
}

impl ProblemDetails {
    pub fn new(status: i32, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: ABOUT_BLANK.to_string(),
            title: title.into(),
            detail: detail.into(),
            status,
            instance: None,
            extensions: Map::new(),
        }
    }

    /// Sets the problem type; an empty value resets it to `about:blank`.
    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = resolve_type(Some(type_url.into()));
        self
    }

    /// Sets the occurrence URI; an empty value clears it.
    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = non_empty(Some(uri.into()));
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Builds the JSON object: base members, then extensions with overwrite.
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("type".to_string(), Value::String(self.type_url));
        body.insert("title".to_string(), Value::String(self.title));
        body.insert("detail".to_string(), Value::String(self.detail));
        body.insert("status".to_string(), Value::from(self.status));
        if let Some(instance) = self.instance {
            body.insert("instance".to_string(), Value::String(instance));
        }
        // Map::insert replaces in place, so overwritten members keep their position.
        for (key, value) in self.extensions {
            body.insert(key, value);
        }
        body
    }
}

impl Serialize for ProblemDetails {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.clone().into_body().serialize(serializer)
    }
}

/// Optional arguments of [`build_problem_response`].
///
/// Every field defaults to absent: `type_url` then resolves to `about:blank`, no
/// `instance` member is emitted, no headers are attached and nothing is merged.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct ProblemOptions {
    /// Problem type URI. `None` or empty means `about:blank`.
    pub type_url: Option<String>,
    /// Occurrence URI. Emitted only when non-empty.
    pub instance: Option<String>,
    /// Response headers, passed through untouched.
    pub headers: Option<HashMap<String, String>>,
    /// Extension members, merged last and winning on collision.
    pub extensions: Option<Map<String, Value>>,
}

impl ProblemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = Some(type_url.into());
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = Some(uri.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = Some(extensions);
        self
    }
}

/// Builds a Problem Details response.
///
/// No input is validated: the status and strings are copied as given. The returned
/// envelope carries `application/problem+json` as both mimetype and content type and the
/// caller's headers unchanged.
pub fn build_problem_response(
    status: i32,
    title: impl Into<String>,
    detail: impl Into<String>,
    options: ProblemOptions,
) -> ProblemResponse {
    let ProblemOptions {
        type_url,
        instance,
        headers,
        extensions,
    } = options;

    let details = ProblemDetails {
        type_url: resolve_type(type_url),
        title: title.into(),
        detail: detail.into(),
        status,
        instance: non_empty(instance),
        extensions: extensions.unwrap_or_default(),
    };

    tracing::trace!(status, problem_type = %details.type_url, "built problem response");
    ProblemResponse::new(status, details.into_body(), headers)
}

fn resolve_type(type_url: Option<String>) -> String {
    non_empty(type_url).unwrap_or_else(|| ABOUT_BLANK.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
