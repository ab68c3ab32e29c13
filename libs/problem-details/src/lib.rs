//! RFC 9457 Problem Details for HTTP APIs.
//!
//! [`build_problem_response`] turns a status, title, detail and a few optional members into
//! a [`ProblemResponse`] with media type `application/problem+json`. The serving layer
//! decides how to put it on the wire: [`ProblemResponse::to_http`] for a plain
//! `http::Response`, or the axum `IntoResponse` impl (feature `axum`).

pub mod error;
pub mod problem;
pub mod response;

pub use error::ProblemError;
pub use problem::{build_problem_response, ProblemDetails, ProblemOptions, ABOUT_BLANK};
pub use response::{
    bad_request, conflict, internal_error, is_problem_response, not_found, ProblemResponse,
    APPLICATION_PROBLEM_JSON,
};
