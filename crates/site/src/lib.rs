//! Server-rendered composition of the agency landing page.
//!
//! Rendering is a pure function of an immutable [`PageConfig`] and the
//! current contact-form state. Nothing here reads ambient state.

pub mod content;
pub mod html;
mod sections;
pub mod tokens;

use client_core::ContactForm;
use motion::{RenderSupport, ThemeMode};
use serde::{Deserialize, Serialize};

pub use sections::render_page;

/// Which decorative backdrop sits behind the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// City image plane with clouds, sparkles and a pointer light.
    #[default]
    Atmosphere,
    /// Starfield, grid floor and particle cloud.
    Space,
}

impl SceneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atmosphere => "atmosphere",
            Self::Space => "space",
        }
    }
}

/// Everything page rendering depends on, fixed for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub theme: ThemeMode,
    pub year: i32,
    pub scene: SceneKind,
    pub render_support: RenderSupport,
    pub background_image_available: bool,
    /// Where the no-script contact form posts to.
    pub form_action: String,
}

impl PageConfig {
    pub fn new(theme: ThemeMode, year: i32) -> Self {
        Self {
            theme,
            year,
            scene: SceneKind::default(),
            render_support: RenderSupport {
                webgl: true,
                reduced_motion: false,
            },
            background_image_available: true,
            form_action: "/contact".into(),
        }
    }

    /// Same page with the other theme; used for the toggle link.
    #[must_use]
    pub fn with_theme(&self, theme: ThemeMode) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }
}

/// Convenience for rendering with an untouched form.
pub fn render_landing(config: &PageConfig) -> String {
    render_page(config, &ContactForm::new())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
