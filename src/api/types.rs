// Albums API wire types
// Response wrappers, the error body and the JSON body extractor

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest},
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AlbumsError;

/// Message used for every failed identifier lookup
pub const ALBUM_NOT_FOUND: &str = "album not found";

/// Structured error body: `{"message": "..."}`
///
/// The status code travels alongside the body but is not serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: StatusCode,

    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 404 with the standard album message
    pub fn album_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ALBUM_NOT_FOUND)
    }

    /// 400 for a body that did not bind
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<AlbumsError> for ErrorResponse {
    fn from(err: AlbumsError) -> Self {
        match err {
            AlbumsError::NotFound(_) => Self::album_not_found(),
            AlbumsError::InvalidInput(message) => Self::bad_request(message),
            AlbumsError::Serialization(e) => Self::bad_request(format!(
                "Failed to deserialize the JSON body into the target type: {}",
                e
            )),
            other => Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, IndentedJson(self)).into_response()
    }
}

/// JSON response indented with four spaces
///
/// Same output clients of the catalogue have always received; plain
/// `axum::Json` would write everything on one line.
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(128);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

        match self.0.serialize(&mut serializer) {
            Ok(()) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                buf,
            )
                .into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                )],
                err.to_string(),
            )
                .into_response(),
        }
    }
}

/// JSON body extractor that answers binding failures with a 400 `ErrorResponse`
///
/// axum's own `Json` rejects with plain text and a mix of 400/415/422; this
/// wrapper turns every rejection into the structured body used elsewhere.
///
/// ## Rust Learning Notes:
///
/// ### Delegating Extractors
/// The `where Json<T>: FromRequest<...>` bound lets us reuse axum's parsing
/// and only replace the rejection type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlbumJson<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for AlbumJson<T>
where
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AlbumsError::InvalidInput(rejection.body_text()).into()),
        }
    }
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: u64,
}

/// Helper function to get current Unix timestamp
pub fn current_timestamp() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_indented_json_uses_four_spaces() {
        let response = IndentedJson(serde_json::json!({ "message": "hi" })).into_response();

        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "{\n    \"message\": \"hi\"\n}");
    }

    #[tokio::test]
    async fn test_error_response_status_and_body() {
        let response = ErrorResponse::album_not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            "{\n    \"message\": \"album not found\"\n}"
        );
    }

    #[test]
    fn test_error_conversion() {
        let not_found: ErrorResponse = AlbumsError::NotFound("7".to_string()).into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, ALBUM_NOT_FOUND);

        let invalid: ErrorResponse = AlbumsError::InvalidInput("bad".to_string()).into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.message, "bad");

        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let malformed: ErrorResponse = AlbumsError::from(parse_error).into();
        assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
        assert!(malformed
            .message
            .starts_with("Failed to deserialize the JSON body into the target type: "));

        let internal: ErrorResponse = AlbumsError::Internal("boom".to_string()).into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
