//! Scroll-spy for the navigation bar.
//!
//! The active section is derived from the scroll offset every time it is
//! needed; nothing is stored between scroll events except the fallback used
//! when no section covers the activation line.

use strum::{AsRefStr, Display, VariantArray};

/// Distance from the top of the viewport, in CSS pixels, that a section has
/// to cover to become active.
pub const ACTIVATION_LINE: f64 = 100.0;

#[derive(Display, AsRefStr, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    fn covers_activation_line(&self, scroll_y: f64) -> bool {
        self.top - scroll_y <= ACTIVATION_LINE && self.bottom - scroll_y >= ACTIVATION_LINE
    }
}

/// First section, in page order, covering the activation line at `scroll_y`.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    Section::VARIANTS.iter().copied().find(|section| {
        bounds
            .iter()
            .any(|b| b.section == *section && b.covers_activation_line(scroll_y))
    })
}

/// Like [`active_section`], keeping `previous` when nothing matches.
pub fn resolve_active(scroll_y: f64, bounds: &[SectionBounds], previous: Section) -> Section {
    active_section(scroll_y, bounds).unwrap_or(previous)
}
