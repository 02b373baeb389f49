use serde::{Deserialize, Serialize};

/// One frame's worth of animation drivers, already normalised.
///
/// Pointer axes are in `[-1, 1]` with `+y` pointing up, scroll is the
/// fraction of the scrollable height travelled in `[0, 1]`, and `elapsed` is
/// seconds since the scene was mounted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameInput {
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub scroll_fraction: f32,
    pub elapsed: f32,
}

impl FrameInput {
    /// Clamps every driver into its documented range; non-finite values
    /// collapse to the neutral position.
    pub fn new(pointer_x: f32, pointer_y: f32, scroll_fraction: f32, elapsed: f32) -> Self {
        Self {
            pointer_x: clamp_finite(pointer_x, -1.0, 1.0),
            pointer_y: clamp_finite(pointer_y, -1.0, 1.0),
            scroll_fraction: clamp_finite(scroll_fraction, 0.0, 1.0),
            elapsed: if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 },
        }
    }

    pub fn from_viewport(snapshot: &ViewportSnapshot) -> Self {
        let pointer_x = normalise_axis(snapshot.pointer_px.0, snapshot.width);
        let pointer_y = -normalise_axis(snapshot.pointer_px.1, snapshot.height);

        let scrollable = snapshot.scroll_height - snapshot.height;
        let scrollable = if scrollable > 0.0 { scrollable } else { 1.0 };

        Self::new(
            pointer_x,
            pointer_y,
            snapshot.scroll_y / scrollable,
            snapshot.elapsed,
        )
    }
}

/// Raw viewport readings in CSS pixels, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    /// Pointer position relative to the top-left corner.
    pub pointer_px: (f32, f32),
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
    /// Full document height.
    pub scroll_height: f32,
    pub elapsed: f32,
}

fn normalise_axis(px: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    (px / extent) * 2.0 - 1.0
}

fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        (min + max) / 2.0
    }
}
