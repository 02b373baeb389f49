//! The atmospheric backdrop: a city image plane, drifting cloud sprites, a
//! sparkle field and a light that follows the pointer.
//!
//! Each layer eases toward a target derived from the current [`FrameInput`].
//! Far layers use a small blend factor and lag behind; near layers use a
//! larger one and react quickly, which reads as parallax depth.

use serde::{Deserialize, Serialize};

use crate::{frame::FrameInput, math::Vec3, theme::ThemeMode};

pub const IMAGE_PLANE_BLEND: f32 = 0.05;
pub const SPARKLE_BLEND: f32 = 0.1;
pub const CLOUD_BLEND: f32 = 0.02;
/// Radians added to the cloud group's yaw every frame.
pub const CLOUD_SPIN_PER_FRAME: f32 = 0.001;

const LIGHT_REACH: f32 = 5.0;
const LIGHT_DEPTH: f32 = 2.0;
const IMAGE_POINTER_REACH: f32 = 0.5;
const IMAGE_TILT: f32 = 0.2;
const IMAGE_SCROLL_DEPTH: f32 = 15.0;
const IMAGE_SCROLL_PAN: f32 = 2.0;
const SPARKLE_POINTER_REACH: f32 = 1.5;
const SPARKLE_SCROLL_DEPTH: f32 = 5.0;
const CLOUD_POINTER_REACH: f32 = 0.2;
const CLOUD_GROUP_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 1.0);

pub const BACKGROUND_IMAGE_URL: &str = "/assets/dc-bg.jpg";
pub const FALLBACK_BACKDROP_COLOR: &str = "#020617";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Smoothed state of every layer after one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub light: Vec3,
    pub image_plane: LayerTransform,
    pub sparkles: LayerTransform,
    pub clouds: LayerTransform,
}

impl Default for SceneFrame {
    fn default() -> Self {
        Self {
            light: Vec3::new(0.0, 0.0, LIGHT_DEPTH),
            image_plane: LayerTransform::default(),
            sparkles: LayerTransform::default(),
            clouds: LayerTransform {
                position: CLOUD_GROUP_ORIGIN,
                rotation: Vec3::ZERO,
            },
        }
    }
}

impl SceneFrame {
    /// Advances every layer one frame toward the targets implied by `input`.
    #[must_use]
    pub fn next(&self, input: &FrameInput) -> SceneFrame {
        let x = input.pointer_x;
        let y = input.pointer_y;
        let scroll = input.scroll_fraction;

        let image_target = Vec3::new(
            x * IMAGE_POINTER_REACH,
            y * IMAGE_POINTER_REACH + scroll * IMAGE_SCROLL_PAN,
            -scroll * IMAGE_SCROLL_DEPTH,
        );
        let image_tilt = Vec3::new(-y * IMAGE_TILT, x * IMAGE_TILT, self.image_plane.rotation.z);

        let sparkle_target = Vec3::new(
            x * SPARKLE_POINTER_REACH,
            y * SPARKLE_POINTER_REACH,
            scroll * SPARKLE_SCROLL_DEPTH,
        );

        let clouds = self.clouds;
        let cloud_target = Vec3::new(
            x * CLOUD_POINTER_REACH,
            clouds.position.y,
            clouds.position.z,
        );

        SceneFrame {
            light: Vec3::new(x * LIGHT_REACH, y * LIGHT_REACH, LIGHT_DEPTH),
            image_plane: LayerTransform {
                position: self.image_plane.position.lerp(image_target, IMAGE_PLANE_BLEND),
                rotation: self.image_plane.rotation.lerp(image_tilt, IMAGE_PLANE_BLEND),
            },
            sparkles: LayerTransform {
                position: self.sparkles.position.lerp(sparkle_target, SPARKLE_BLEND),
                rotation: self.sparkles.rotation,
            },
            clouds: LayerTransform {
                position: clouds.position.lerp(cloud_target, CLOUD_BLEND),
                rotation: Vec3::new(
                    clouds.rotation.x,
                    clouds.rotation.y + CLOUD_SPIN_PER_FRAME,
                    clouds.rotation.z,
                ),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudSprite {
    pub position: Vec3,
    pub opacity: f32,
    pub speed: f32,
    pub width: f32,
    pub depth: f32,
    pub segments: u32,
}

pub fn cloud_sprites() -> [CloudSprite; 2] {
    let sprite = |position| CloudSprite {
        position,
        opacity: 0.3,
        speed: 0.4,
        width: 10.0,
        depth: 1.5,
        segments: 10,
    };
    [
        sprite(Vec3::new(-4.0, 2.0, -2.0)),
        sprite(Vec3::new(4.0, -2.0, -5.0)),
    ]
}

/// Theme-dependent colours and intensities for the backdrop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePalette {
    pub sparkle_color: &'static str,
    pub sparkle_opacity: f32,
    pub cloud_color: &'static str,
    pub image_opacity: f32,
    pub light_color: &'static str,
    pub light_intensity: f32,
    pub ambient_intensity: f32,
}

impl ScenePalette {
    pub fn for_theme(theme: ThemeMode) -> Self {
        Self {
            sparkle_color: theme.pick("#4FA3FF", "#2563EB"),
            sparkle_opacity: theme.pick(0.8, 1.0),
            cloud_color: theme.pick("#8cbaff", "#E2E8F0"),
            // In light mode the city image is only a faint watermark.
            image_opacity: theme.pick(0.5, 0.15),
            light_color: "#4FA3FF",
            light_intensity: theme.pick(2.0, 1.0),
            ambient_intensity: theme.pick(0.5, 1.5),
        }
    }
}

/// What the image plane is painted with once asset loading has settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaneFill {
    Image { url: String, opacity: f32 },
    Color { color: String },
}

impl PlaneFill {
    pub fn resolve(palette: &ScenePalette, image_loaded: bool) -> Self {
        if image_loaded {
            Self::Image {
                url: BACKGROUND_IMAGE_URL.to_string(),
                opacity: palette.image_opacity,
            }
        } else {
            Self::Color {
                color: FALLBACK_BACKDROP_COLOR.to_string(),
            }
        }
    }
}

/// Capabilities reported by the host before the scene mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSupport {
    pub webgl: bool,
    pub reduced_motion: bool,
}

/// A mounted, running backdrop. Dropping it is unmounting it.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundPipeline {
    palette: ScenePalette,
    frame: SceneFrame,
    frames_rendered: u64,
}

impl BackgroundPipeline {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            palette: ScenePalette::for_theme(theme),
            frame: SceneFrame::default(),
            frames_rendered: 0,
        }
    }

    pub fn palette(&self) -> &ScenePalette {
        &self.palette
    }

    pub fn current(&self) -> &SceneFrame {
        &self.frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Swaps colours without resetting layer positions.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.palette = ScenePalette::for_theme(theme);
    }

    pub fn tick(&mut self, input: &FrameInput) -> SceneFrame {
        self.frame = self.frame.next(input);
        self.frames_rendered += 1;
        self.frame
    }
}

/// The backdrop actually shown behind the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    Animated(BackgroundPipeline),
    /// Rendering is unavailable; a flat colour stands in and nothing ticks.
    Static { color: &'static str },
}

impl Backdrop {
    pub fn select(support: RenderSupport, theme: ThemeMode) -> Self {
        if support.webgl && !support.reduced_motion {
            Self::Animated(BackgroundPipeline::new(theme))
        } else {
            Self::Static {
                color: FALLBACK_BACKDROP_COLOR,
            }
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }

    /// Advances the scene if there is one; a static backdrop ignores frames.
    pub fn tick(&mut self, input: &FrameInput) -> Option<SceneFrame> {
        match self {
            Self::Animated(pipeline) => Some(pipeline.tick(input)),
            Self::Static { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/background_tests.rs"]
mod tests;
