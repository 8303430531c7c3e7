//! Error handling middleware - `{"error": "..."}` JSON responses.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use masterblog_core::DomainError;
use masterblog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type rendered as an `ErrorResponse` body.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) | AppError::BadRequest(detail) => {
                ErrorResponse::new(detail.as_str())
            }
            AppError::Internal(detail) => {
                // Log internal errors, never leak them
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidParameter(msg) | DomainError::InvalidInput(msg) => {
                AppError::BadRequest(msg)
            }
            DomainError::NotFound { id } => {
                tracing::debug!(post_id = id, "Post not found");
                AppError::NotFound(ErrorResponse::not_found().error)
            }
            DomainError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Unparseable or mistyped JSON bodies are invalid input.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::BadRequest(ErrorResponse::invalid_input().error).into()
}

/// A path id that is not an unsigned integer cannot name a post.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected path parameter");
    AppError::NotFound(ErrorResponse::not_found().error).into()
}

/// A query string that cannot be decoded at all is rejected without echoing
/// the decoder's message.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::BadRequest(ErrorResponse::invalid_query().error).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use masterblog_core::StoreError;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::InvalidParameter("bad sort".into()), StatusCode::BAD_REQUEST),
            (DomainError::invalid_input(), StatusCode::BAD_REQUEST),
            (DomainError::NotFound { id: 7 }, StatusCode::NOT_FOUND),
            (
                DomainError::Store(StoreError::Io("denied".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[actix_web::test]
    async fn test_query_error_hides_decoder_message() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let err = QueryPayloadError::Deserialize(serde::de::Error::custom("duplicate field"));

        let res = query_error_handler(err, &req).error_response();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = actix_web::body::to_bytes(res.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, ErrorResponse::invalid_query());
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::from(DomainError::NotFound { id: 7 });
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Post not found"));
    }
}
