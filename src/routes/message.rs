use axum::{Json, body::Bytes, extract::State};
use folio_contact::{Acknowledgement, Submission};

use crate::{email::ContactEmail, error::AppError, routes::AppState};

/// POST /api/message - Relay a contact submission to the operator
///
/// The body is read as JSON whatever its content type. Fields are relayed
/// as received; missing or `null` ones become empty strings and other
/// non-string values keep their JSON text. Only a body that does not decode
/// as a JSON object is rejected.
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Acknowledgement>, AppError> {
    let submission: Submission = serde_json::from_slice(&body)?;

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        "Relaying contact submission"
    );

    let email = ContactEmail::compose(&submission)?;
    app_state.mailer.send(email).await?;

    Ok(Json(Acknowledgement::ok()))
}
