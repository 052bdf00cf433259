use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use codata_api::ApiError;
use tracing::error;

pub const NOT_FOUND_BODY: &str = "Resource not found";

/// `ApiError` as an HTTP response: 404 and 400 carry plain-text bodies,
/// anything else is logged and answered with a bare 500.
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.0 {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            ApiError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
