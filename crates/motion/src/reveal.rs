//! Scroll-reveal and parallax mappings.
//!
//! A mapping turns a progress value into visual parameters. Progress at or
//! below the lower bound gives the initial state exactly, progress at or above
//! the upper bound gives the final state exactly, and nothing is
//! extrapolated past either end.

use serde::{Deserialize, Serialize};

use crate::{
    math::{lerp, progress_between},
    MotionError,
};

/// Scroll offset (px) past which the navigation bar switches to its solid
/// style.
pub const NAV_SCROLLED_THRESHOLD: f32 = 50.0;

pub fn nav_is_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// Start delay for the `index`-th item of a staggered group.
pub fn stagger_delay(base: f32, index: usize, step: f32) -> f32 {
    base + index as f32 * step
}

/// Piecewise-linear map from an input range to an output range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollTransform {
    input: Vec<f32>,
    output: Vec<f32>,
}

impl ScrollTransform {
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self, MotionError> {
        if input.len() < 2 {
            return Err(MotionError::TooFewStops(input.len()));
        }
        if input.len() != output.len() {
            return Err(MotionError::StopCountMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        let ordered = input.iter().all(|stop| stop.is_finite())
            && input.windows(2).all(|pair| pair[0] < pair[1]);
        if !ordered {
            return Err(MotionError::UnorderedStops);
        }
        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    /// Two-stop transform; the common case.
    pub fn linear(from: (f32, f32), to: (f32, f32)) -> Result<Self, MotionError> {
        Self::new(&[from.0, to.0], &[from.1, to.1])
    }

    pub fn map(&self, value: f32) -> f32 {
        let last = self.input.len() - 1;
        if value.is_nan() || value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[last] {
            return self.output[last];
        }
        let segment = self
            .input
            .windows(2)
            .position(|pair| value < pair[1])
            .unwrap_or(last - 1);
        let t = progress_between(value, self.input[segment], self.input[segment + 1]);
        lerp(self.output[segment], self.output[segment + 1], t)
    }
}

/// Hero block fade-out: over the first 500px of scroll the hero fades from
/// opaque to transparent while sliding 200px down.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroScroll {
    opacity: ScrollTransform,
    offset_y: ScrollTransform,
}

impl HeroScroll {
    pub const DISTANCE: f32 = 500.0;

    pub fn new() -> Self {
        Self {
            opacity: ScrollTransform {
                input: vec![0.0, Self::DISTANCE],
                output: vec![1.0, 0.0],
            },
            offset_y: ScrollTransform {
                input: vec![0.0, Self::DISTANCE],
                output: vec![0.0, 200.0],
            },
        }
    }

    /// `(opacity, translate_y)` at the given scroll offset.
    pub fn at(&self, scroll_y: f32) -> (f32, f32) {
        (self.opacity.map(scroll_y), self.offset_y.map(scroll_y))
    }
}

impl Default for HeroScroll {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual parameters a reveal animates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl RevealState {
    pub const SETTLED: RevealState = RevealState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    pub const HIDDEN: RevealState = RevealState {
        opacity: 0.0,
        ..Self::SETTLED
    };

    #[must_use]
    pub fn lerp(self, to: RevealState, t: f32) -> RevealState {
        RevealState {
            opacity: lerp(self.opacity, to.opacity, t),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            scale: lerp(self.scale, to.scale, t),
            rotation: lerp(self.rotation, to.rotation, t),
        }
    }

    /// Inline CSS for this state.
    pub fn to_css(&self) -> String {
        format!(
            "opacity:{};transform:translate({}px,{}px) scale({}) rotate({}deg)",
            self.opacity, self.x, self.y, self.scale, self.rotation
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    pub from: RevealState,
    pub to: RevealState,
    /// Progress at which the final state is reached.
    pub upper: f32,
}

impl Reveal {
    pub fn new(from: RevealState, to: RevealState, upper: f32) -> Result<Self, MotionError> {
        if !(upper.is_finite() && upper > 0.0) {
            return Err(MotionError::InvalidUpperBound(upper));
        }
        Ok(Self { from, to, upper })
    }

    pub fn fade_up(distance: f32) -> Self {
        Self::preset(RevealState {
            y: distance,
            ..RevealState::HIDDEN
        })
    }

    pub fn slide_in(dx: f32) -> Self {
        Self::preset(RevealState {
            x: dx,
            ..RevealState::HIDDEN
        })
    }

    pub fn zoom_in(scale: f32) -> Self {
        Self::preset(RevealState {
            scale,
            ..RevealState::HIDDEN
        })
    }

    pub fn fade_in() -> Self {
        Self::preset(RevealState::HIDDEN)
    }

    fn preset(from: RevealState) -> Self {
        Self {
            from,
            to: RevealState::SETTLED,
            upper: 1.0,
        }
    }

    pub fn at(&self, progress: f32) -> RevealState {
        if progress.is_nan() || progress <= 0.0 {
            return self.from;
        }
        if progress >= self.upper {
            return self.to;
        }
        self.from.lerp(self.to, progress / self.upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    /// Follows progress in both directions.
    #[default]
    Continuous,
    /// Latches in the final state the first time it is reached.
    Once,
}

/// A reveal bound to one element, remembering whether it already fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    reveal: Reveal,
    mode: RevealMode,
    fired: bool,
}

impl RevealTracker {
    pub fn new(reveal: Reveal, mode: RevealMode) -> Self {
        Self {
            reveal,
            mode,
            fired: false,
        }
    }

    pub fn once(reveal: Reveal) -> Self {
        Self::new(reveal, RevealMode::Once)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn observe(&mut self, progress: f32) -> RevealState {
        if self.mode == RevealMode::Once {
            if self.fired {
                return self.reveal.to;
            }
            if progress >= self.reveal.upper {
                self.fired = true;
            }
        }
        self.reveal.at(progress)
    }

    /// Drives the reveal from an element's position. In once mode the
    /// tracker latches as soon as the element is inside the shrunken
    /// viewport, whatever its progress; scrolling back never hides it.
    pub fn observe_entry(
        &mut self,
        entry: &ViewportEntry,
        element_top: f32,
        viewport_height: f32,
    ) -> RevealState {
        if self.mode == RevealMode::Once && entry.is_visible(element_top, viewport_height) {
            self.fired = true;
        }
        self.observe(entry.progress(element_top, viewport_height))
    }
}

/// How far an element has travelled into the viewport.
///
/// `margin` shrinks the viewport from the bottom edge, so an element only
/// starts revealing once its top is `margin` px above the fold. Progress
/// reaches 1 after a further `travel` px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportEntry {
    pub margin: f32,
    pub travel: f32,
}

impl ViewportEntry {
    pub fn progress(&self, element_top: f32, viewport_height: f32) -> f32 {
        let start = viewport_height - self.margin;
        progress_between(start - element_top, 0.0, self.travel.max(f32::EPSILON))
    }

    pub fn is_visible(&self, element_top: f32, viewport_height: f32) -> bool {
        element_top < viewport_height - self.margin
    }
}

impl Default for ViewportEntry {
    fn default() -> Self {
        Self {
            margin: 100.0,
            travel: 200.0,
        }
    }
}

/// Pointer-driven offset: nearer content uses a larger depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parallax {
    pub depth: f32,
}

impl Parallax {
    pub fn offset(&self, pointer_x: f32, pointer_y: f32) -> (f32, f32) {
        (
            pointer_x.clamp(-1.0, 1.0) * self.depth,
            pointer_y.clamp(-1.0, 1.0) * self.depth,
        )
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
