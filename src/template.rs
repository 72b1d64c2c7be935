use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    /// Capitalizes the first letter, e.g. a section id used as a nav label.
    #[askama::filter_fn]
    pub fn label(value: &str, _values: &dyn askama::Values) -> askama::Result<String> {
        let mut chars = value.chars();

        Ok(match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        })
    }
}

/// Page renderer handed to route handlers.
pub struct Template {
    site: SiteConfig,
}

impl Template {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.config.site.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template as _;

    #[derive(askama::Template)]
    #[template(source = "{{ name|label }}", ext = "txt")]
    struct LabelTemplate<'a> {
        name: &'a str,
    }

    #[test]
    fn test_label_filter() {
        assert_eq!(
            LabelTemplate { name: "experience" }.render().unwrap(),
            "Experience"
        );
        assert_eq!(LabelTemplate { name: "" }.render().unwrap(), "");
    }

    #[test]
    fn test_not_found_page() {
        let response = Template::new(SiteConfig::default()).render_with_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate,
        );

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
