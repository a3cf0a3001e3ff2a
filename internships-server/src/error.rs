use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// An error from the API: a status code and a message for the client.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Some handler-specific error
    Custom(StatusCode, String),
}

/// Return an error from a handler-specific error type.
#[macro_export]
macro_rules! bail {
    ($message:expr) => {
        return Err($crate::error::Error::custom($message))
    };
    ($message:expr, $status:expr) => {
        return Err($crate::error::Error::custom_with_status($message, $status))
    };
}

impl Error {
    /// Construct a custom error
    pub fn custom(message: &str) -> Self {
        Self::custom_with_status(message, StatusCode::BAD_REQUEST)
    }

    /// Construct a custom error with a specific status code
    pub fn custom_with_status(message: &str, status: StatusCode) -> Self {
        Self::Custom(status, message.to_string())
    }

    /// Construct a 404
    pub fn not_found(message: &str) -> Self {
        Self::custom_with_status(message, StatusCode::NOT_FOUND)
    }

    /// Split into status and message
    #[cfg(test)]
    pub fn unwrap_custom(self) -> (StatusCode, String) {
        let Self::Custom(status_code, message) = self;
        (status_code, message)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let Self::Custom(status, error_message) = self;

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_not_found_body() {
        let resp = Error::not_found("internship not found").into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": "internship not found"}));
    }
}
