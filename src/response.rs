use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::problem::ProblemError;

/// Content type for problem details responses
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

impl ProblemError {
    /// HTTP status for this problem, 500 when unset or invalid
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ProblemError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self.to_json() {
            Ok(body) => (
                status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                error!(
                    error = %err,
                    title = %self.title,
                    status = %self.status,
                    "Failed to encode problem details response"
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
