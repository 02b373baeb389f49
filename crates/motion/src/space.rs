//! The deep-space backdrop: a slowly turning starfield, a grid floor that
//! scrolls toward the viewer, a looping particle cloud and a camera that
//! leans toward the pointer.

use rand::Rng;
use serde::Serialize;

use crate::{frame::FrameInput, math::Vec3};

pub const BACKGROUND_COLOR: &str = "#020617";
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 40.0;
pub const CAMERA_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 0.0, -50.0);
pub const CAMERA_BLEND: f32 = 0.05;
const CAMERA_REACH: f32 = 0.5;

const STAR_YAW_RATE: f32 = 0.05;
const STAR_PITCH_RATE: f32 = 0.02;
const STAR_PITCH_AMPLITUDE: f32 = 0.1;

const GRID_SPEED: f32 = 2.0;
const GRID_PERIOD: f32 = 10.0;

const PARTICLE_SPIN_PER_FRAME: f32 = 0.001;
const PARTICLE_DRIFT_PER_FRAME: f32 = 0.05;
const PARTICLE_WRAP_AT: f32 = 20.0;
const PARTICLE_RESTART_AT: f32 = -20.0;
/// Half-extents of the box particles are scattered in.
const PARTICLE_SPREAD: Vec3 = Vec3::new(25.0, 15.0, 50.0);
pub const DEFAULT_PARTICLE_COUNT: usize = 300;

/// Starfield orientation at time `t` seconds. Depends on time only.
pub fn starfield_rotation(t: f32) -> Vec3 {
    Vec3::new(
        (t * STAR_PITCH_RATE).sin() * STAR_PITCH_AMPLITUDE,
        t * STAR_YAW_RATE,
        0.0,
    )
}

/// Grid floor depth offset at time `t`; wraps every [`GRID_PERIOD`] units so
/// the floor appears endless.
pub fn grid_offset(t: f32) -> f32 {
    (t * GRID_SPEED).rem_euclid(GRID_PERIOD)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleField {
    points: Vec<Vec3>,
    rotation_z: f32,
    offset_z: f32,
}

impl ParticleField {
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Self {
        let points = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-PARTICLE_SPREAD.x..PARTICLE_SPREAD.x),
                    rng.gen_range(-PARTICLE_SPREAD.y..PARTICLE_SPREAD.y),
                    rng.gen_range(-PARTICLE_SPREAD.z..PARTICLE_SPREAD.z),
                )
            })
            .collect();
        Self {
            points,
            rotation_z: 0.0,
            offset_z: 0.0,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn rotation_z(&self) -> f32 {
        self.rotation_z
    }

    pub fn offset_z(&self) -> f32 {
        self.offset_z
    }

    fn advance(&mut self) {
        self.rotation_z += PARTICLE_SPIN_PER_FRAME;
        self.offset_z += PARTICLE_DRIFT_PER_FRAME;
        if self.offset_z > PARTICLE_WRAP_AT {
            self.offset_z = PARTICLE_RESTART_AT;
        }
    }
}

/// Per-frame readout of the space backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpaceFrame {
    pub stars_rotation: Vec3,
    pub grid_z: f32,
    pub particles_rotation_z: f32,
    pub particles_z: f32,
    pub camera: Vec3,
    pub look_at: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpaceScene {
    particles: ParticleField,
    camera: Vec3,
}

impl SpaceScene {
    pub fn new<R: Rng>(particle_count: usize, rng: &mut R) -> Self {
        Self {
            particles: ParticleField::scatter(particle_count, rng),
            camera: CAMERA_ORIGIN,
        }
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn tick(&mut self, input: &FrameInput) -> SpaceFrame {
        self.particles.advance();

        let target = Vec3::new(
            input.pointer_x * CAMERA_REACH,
            input.pointer_y * CAMERA_REACH,
            self.camera.z,
        );
        self.camera = self.camera.lerp(target, CAMERA_BLEND);

        SpaceFrame {
            stars_rotation: starfield_rotation(input.elapsed),
            grid_z: grid_offset(input.elapsed),
            particles_rotation_z: self.particles.rotation_z,
            particles_z: self.particles.offset_z,
            camera: self.camera,
            look_at: CAMERA_LOOK_AT,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn scene(count: usize) -> SpaceScene {
        SpaceScene::new(count, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn particles_stay_inside_the_spread_box() {
        let scene = scene(DEFAULT_PARTICLE_COUNT);
        assert_eq!(scene.particles().points().len(), DEFAULT_PARTICLE_COUNT);
        for point in scene.particles().points() {
            assert!(point.x.abs() <= 25.0);
            assert!(point.y.abs() <= 15.0);
            assert!(point.z.abs() <= 50.0);
        }
    }

    #[test]
    fn same_seed_scatters_identically() {
        assert_eq!(scene(50).particles(), scene(50).particles());
    }

    #[test]
    fn particle_drift_wraps_back_behind_the_camera() {
        let mut scene = scene(1);
        let input = FrameInput::default();
        let mut wrapped = false;
        for _ in 0..500 {
            let frame = scene.tick(&input);
            assert!(frame.particles_z <= PARTICLE_WRAP_AT + PARTICLE_DRIFT_PER_FRAME);
            if frame.particles_z == PARTICLE_RESTART_AT {
                wrapped = true;
            }
        }
        assert!(wrapped);
    }

    #[test]
    fn grid_offset_repeats_every_period() {
        assert_eq!(grid_offset(0.0), 0.0);
        assert_eq!(grid_offset(2.5), 5.0);
        assert!((grid_offset(6.0) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn starfield_turns_with_time() {
        let rotation = starfield_rotation(10.0);
        assert!((rotation.y - 0.5).abs() < 1e-6);
        assert!(rotation.x.abs() <= 0.1);
    }

    #[test]
    fn camera_leans_toward_pointer_and_keeps_distance() {
        let mut scene = scene(1);
        let input = FrameInput::new(1.0, -1.0, 0.0, 0.0);
        let first = scene.tick(&input);
        assert!((first.camera.x - 0.025).abs() < 1e-6);
        assert!((first.camera.y + 0.025).abs() < 1e-6);

        let mut last = first;
        for _ in 0..300 {
            last = scene.tick(&input);
        }
        assert!((last.camera.x - 0.5).abs() < 1e-3);
        assert!((last.camera.z - 10.0).abs() < 1e-4);
        assert_eq!(last.look_at, CAMERA_LOOK_AT);
    }
}
