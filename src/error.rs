use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::email::MailError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Mail relay error: {0}")]
    Mail(#[from] MailError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidBody(e) => {
                tracing::warn!(error = %e, "Rejected contact submission with malformed body");
                StatusCode::BAD_REQUEST
            }
            AppError::Mail(e) => {
                tracing::error!(error = %e, "Failed to relay contact message");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(json!({
                "success": false,
                "error": self.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_body_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{name:").unwrap_err();
        let response = AppError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_mail_failure_is_server_error() {
        let err = "".parse::<lettre::message::Mailbox>().unwrap_err();
        let response = AppError::from(MailError::Address(String::new(), err)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
