use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::email::Mailer;
use crate::template::{NotFoundTemplate, Template};

mod health;
mod index;
mod message;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: Arc<dyn Mailer>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    let resume_path = app_state.config.site.resume_path.to_owned();

    Router::new()
        // Health check endpoint (no state required)
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route(folio_contact::MESSAGE_PATH, post(message::action))
        .route(&resume_path, get(crate::assets::resume))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
