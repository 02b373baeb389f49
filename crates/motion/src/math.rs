use serde::{Deserialize, Serialize};

/// `(1 - t) * a + t * b`. Exact at both ends: `t = 0` yields `a` and `t = 1`
/// yields `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Position of `value` between `start` and `end`, clamped to `[0, 1]`.
pub fn progress_between(value: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if value >= end { 1.0 } else { 0.0 };
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn lerp(self, target: Vec3, t: f32) -> Vec3 {
        Vec3 {
            x: lerp(self.x, target.x, t),
            y: lerp(self.y, target.y, t),
            z: lerp(self.z, target.z, t),
        }
    }

    pub fn max_abs(self) -> f32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_is_exact_at_the_ends() {
        assert_eq!(lerp(0.3, 0.7, 0.0), 0.3);
        assert_eq!(lerp(0.3, 0.7, 1.0), 0.7);
        assert_eq!(lerp(-2.0, 2.0, 0.5), 0.0);
    }

    #[test]
    fn progress_between_clamps() {
        assert_eq!(progress_between(-10.0, 0.0, 500.0), 0.0);
        assert_eq!(progress_between(250.0, 0.0, 500.0), 0.5);
        assert_eq!(progress_between(900.0, 0.0, 500.0), 1.0);
        assert_eq!(progress_between(3.0, 5.0, 5.0), 0.0);
        assert_eq!(progress_between(5.0, 5.0, 5.0), 1.0);
    }

    #[test]
    fn vec3_lerp_moves_each_axis() {
        let v = Vec3::ZERO.lerp(Vec3::new(10.0, -10.0, 4.0), 0.1);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!((v.y + 1.0).abs() < 1e-6);
        assert!((v.z - 0.4).abs() < 1e-6);
        assert!((v.max_abs() - 1.0).abs() < 1e-6);
    }
}
