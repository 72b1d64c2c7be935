mod client;
mod form;
mod submission;

pub use client::*;
pub use form::*;
pub use submission::*;

/// Path of the submission endpoint, relative to the site root.
pub const MESSAGE_PATH: &str = "/api/message";
