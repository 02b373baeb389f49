//! Per-frame animation math for the site backdrop and scroll effects.
//!
//! Everything here is a pure function of an explicit [`FrameInput`]. The only
//! place that reads the pointer or the scroll position is
//! [`FrameInput::from_viewport`]; callers sample the viewport once per frame
//! and hand the snapshot to every layer.

pub mod background;
pub mod frame;
pub mod math;
pub mod reveal;
pub mod space;
pub mod theme;

pub use background::{Backdrop, BackgroundPipeline, RenderSupport, SceneFrame, ScenePalette};
pub use frame::{FrameInput, ViewportSnapshot};
pub use math::{lerp, Vec3};
pub use reveal::{Parallax, Reveal, RevealState, RevealTracker, ScrollTransform};
pub use space::SpaceScene;
pub use theme::ThemeMode;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("keyframes need at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("input has {input} stops but output has {output}")]
    StopCountMismatch { input: usize, output: usize },
    #[error("input stops must be finite and strictly increasing")]
    UnorderedStops,
    #[error("reveal upper bound must be positive, got {0}")]
    InvalidUpperBound(f32),
}
