use axum::response::IntoResponse;
use strum::VariantArray;

use crate::content::{EXPERIENCES, Experience, PROFILE, PROJECTS, Profile, Project, SKILLS};
use crate::section::Section;
use crate::template::{Template, filters};

pub struct NavItem {
    pub id: &'static str,
    pub active: bool,
}

/// The page opens at the hero section; the browser moves the highlight
/// from there.
fn nav_items() -> Vec<NavItem> {
    let active = Section::default();

    Section::VARIANTS
        .iter()
        .map(|section| NavItem {
            id: section.as_ref(),
            active: *section == active,
        })
        .collect()
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub nav: Vec<NavItem>,
    pub profile: &'static Profile,
    pub skills: &'static [&'static str],
    pub experiences: &'static [Experience],
    pub projects: &'static [Project],
    pub resume_path: &'a str,
    pub year: i32,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        nav: nav_items(),
        profile: &PROFILE,
        skills: SKILLS,
        experiences: EXPERIENCES,
        projects: PROJECTS,
        resume_path: &template.site().resume_path,
        year: time::OffsetDateTime::now_utc().year(),
    })
}
