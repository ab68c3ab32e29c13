//! Error catalog support: static definitions rendered as problem responses.

use problem_details::{build_problem_response, ProblemOptions, ProblemResponse, ABOUT_BLANK};

use crate::config::CatalogConfig;

/// Static error definition from catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub code: &'static str,
    /// Explicit problem type. When absent the type comes from [`CatalogConfig`].
    pub type_url: Option<&'static str>,
}

impl ErrDef {
    pub const fn new(status: u16, title: &'static str, code: &'static str) -> Self {
        Self {
            status,
            title,
            code,
            type_url: None,
        }
    }

    #[must_use]
    pub const fn with_type(mut self, type_url: &'static str) -> Self {
        self.type_url = Some(type_url);
        self
    }

    /// Effective problem type: explicit URL, else configured base + code, else `about:blank`.
    pub fn type_url(&self, config: &CatalogConfig) -> String {
        match (self.type_url, config.type_base_url.as_deref()) {
            (Some(url), _) => url.to_string(),
            (None, Some(base)) if !base.is_empty() => {
                format!("{}/{}", base.trim_end_matches('/'), self.code)
            }
            _ => ABOUT_BLANK.to_string(),
        }
    }

    /// Options carrying the type, the code member and the configured default headers.
    ///
    /// Callers may add more extensions before building; theirs win on collision.
    pub fn options(&self, config: &CatalogConfig) -> ProblemOptions {
        let options = ProblemOptions::new()
            .with_type(self.type_url(config))
            .with_extension(config.code_member.as_str(), self.code);
        if config.default_headers.is_empty() {
            options
        } else {
            options.with_headers(config.default_headers.clone())
        }
    }

    /// Convert this error definition into a response using the default configuration.
    #[inline]
    pub fn to_response(&self, detail: impl Into<String>) -> ProblemResponse {
        self.to_response_with(&CatalogConfig::default(), detail, "", None)
    }

    /// Convert this error definition into a response, attaching instance and trace id.
    pub fn to_response_with(
        &self,
        config: &CatalogConfig,
        detail: impl Into<String>,
        instance: &str,
        trace_id: Option<String>,
    ) -> ProblemResponse {
        let mut options = self.options(config).with_instance(instance);
        if let Some(tid) = trace_id {
            options = options.with_extension(config.trace_id_member.as_str(), tid);
        }
        build_problem_response(i32::from(self.status), self.title, detail, options)
    }
}
