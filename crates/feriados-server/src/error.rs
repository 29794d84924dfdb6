//! Transport-facing error encoding.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use feriados_core::Error;

/// Wrapper turning engine errors into HTTP responses.
///
/// The mapping follows the engine taxonomy: malformed input is a client
/// error, absence is 404, policy refusals are 403, and storage failures are
/// 500s with the cause preserved in the body.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed in the repository");
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "code": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        let cases = [
            (Error::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (Error::NotFound, StatusCode::NOT_FOUND),
            (Error::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (
                Error::Repository("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            let response = ApiError(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
