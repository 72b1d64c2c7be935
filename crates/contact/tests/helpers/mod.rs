use std::sync::Mutex;

use async_trait::async_trait;
use folio_contact::{Acknowledgement, ContactForm, Field, MessageClient, Submission};

/// Records every submission and answers with a fixed outcome.
#[derive(Default)]
pub struct StubClient {
    pub fail: bool,
    pub sent: Mutex<Vec<Submission>>,
}

impl StubClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Submission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageClient for StubClient {
    async fn send(&self, submission: &Submission) -> folio_shared::Result<Acknowledgement> {
        self.sent.lock().unwrap().push(submission.clone());

        if self.fail {
            folio_shared::bail!("connection refused");
        }

        Ok(Acknowledgement::ok())
    }
}

#[allow(dead_code)]
pub fn filled_form(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.edit(Field::Name, name);
    form.edit(Field::Email, email);
    form.edit(Field::Message, message);

    form
}

/// Client whose request never completes.
pub struct HangingClient;

#[async_trait]
impl MessageClient for HangingClient {
    async fn send(&self, _submission: &Submission) -> folio_shared::Result<Acknowledgement> {
        std::future::pending().await
    }
}
