#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request};
use folio::{
    AppState, Config,
    config::{EmailConfig, LoggingConfig, ServerConfig, SiteConfig},
    email::{ContactEmail, MailError, Mailer},
};

/// Mailer that keeps every relayed message instead of talking to SMTP.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    fail: bool,
    sent: Arc<Mutex<Vec<ContactEmail>>>,
}

impl RecordingMailer {
    /// A mailer whose every send fails, as an unreachable relay would.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<ContactEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError> {
        if self.fail {
            let err = "".parse::<lettre::message::Mailbox>().unwrap_err();
            return Err(MailError::Address(String::new(), err));
        }

        self.sent.lock().unwrap().push(email);

        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig::default(),
        site: SiteConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app(mailer: RecordingMailer) -> Router {
    folio::router(AppState {
        config: test_config(),
        mailer: Arc::new(mailer),
    })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_message(body: impl Into<Body>, content_type: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/message")
        .header("content-type", content_type)
        .body(body.into())
        .unwrap()
}
