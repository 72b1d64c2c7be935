use strum::{AsRefStr, Display, VariantArray};

use crate::{MessageClient, Submission};

pub const VALIDATION_NOTICE: &str = "Please fill all the required fields!";
pub const SUCCESS_NOTICE: &str = "Message sent successfully, I'll get back to you soon!";
pub const FAILURE_NOTICE: &str = "Error Sending Message, Please Try Again!";

#[derive(Display, AsRefStr, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// In-memory state of the contact form.
///
/// `submit` moves the form through `idle -> loading -> success | error`.
/// Fields are cleared after every attempt that reached the client, whatever
/// the outcome, and the next edit brings a finished form back to `idle`.
/// A cancelled attempt ends as a failure.
#[derive(Default, Debug)]
pub struct ContactForm {
    fields: Submission,
    status: Status,
    notice: Option<&'static str>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }

        if matches!(self.status, Status::Success | Status::Error) {
            self.status = Status::Idle;
            self.notice = None;
        }
    }

    pub fn fields(&self) -> &Submission {
        &self.fields
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub async fn submit<C>(&mut self, client: &C) -> Status
    where
        C: MessageClient + ?Sized,
    {
        // trigger stays disabled while a request is in flight
        if !self.can_submit() {
            return self.status;
        }

        if let Err(err) = self.fields.ensure_complete() {
            tracing::debug!(error = %err, "contact form incomplete, nothing sent");
            self.status = Status::Error;
            self.notice = Some(VALIDATION_NOTICE);

            return self.status;
        }

        self.status = Status::Loading;
        self.notice = None;

        let submission = std::mem::take(&mut self.fields);
        let in_flight = InFlight {
            status: &mut self.status,
            notice: &mut self.notice,
            settled: false,
        };

        match client.send(&submission).await {
            Ok(_) => in_flight.settle(Status::Success, SUCCESS_NOTICE),
            Err(err) => {
                tracing::warn!(error = %err, "failed to send contact message");
                in_flight.settle(Status::Error, FAILURE_NOTICE);
            }
        }

        self.status
    }
}

/// Outcome slot of a submission in flight.
///
/// Dropping it unsettled (the `submit` future was cancelled) ends the attempt
/// as a failure so the form never stays in `loading`.
struct InFlight<'a> {
    status: &'a mut Status,
    notice: &'a mut Option<&'static str>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, status: Status, notice: &'static str) {
        *self.status = status;
        *self.notice = Some(notice);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("contact message submission cancelled");
            *self.status = Status::Error;
            *self.notice = Some(FAILURE_NOTICE);
        }
    }
}
