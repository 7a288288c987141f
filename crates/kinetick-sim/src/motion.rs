//! Platform motion functions
//!
//! A motion function is a pure pose generator: given the platform's motion
//! clock it answers where the platform wants to be. Keeping it pure (no
//! internal accumulation) is what makes platform motion trivially
//! rollback-safe - restoring the clock restores the motion.

use glam::{Quat, Vec3};
use kinetick_core::Pose;

/// Pure target-pose generator for a moving platform
pub trait MotionFunction {
    /// Target pose at motion time `t` seconds
    fn sample(&self, t: f32) -> Pose;
}

/// Sinusoidal translation along an axis plus constant-rate rotation
///
/// The reference motion function: a platform that slides back and forth
/// while slowly turning. Useful as-is for elevators and carousels, and as
/// the model for writing custom motion functions.
#[derive(Debug, Clone, Copy)]
pub struct WaveMotion {
    /// Center of the translation
    pub origin: Vec3,
    /// Direction of travel (normalized before use)
    pub translation_axis: Vec3,
    /// Half-width of the travel in world units
    pub translation_amplitude: f32,
    /// Phase rate of the sine in radians per second
    pub translation_rate: f32,
    /// Spin axis (normalized before use)
    pub rotation_axis: Vec3,
    /// Spin rate in radians per second
    pub rotation_rate: f32,
}

impl WaveMotion {
    /// A platform sliding on the X axis and spinning around Y, centered at
    /// `origin`
    pub fn at(origin: Vec3) -> Self {
        Self {
            origin,
            translation_axis: Vec3::X,
            translation_amplitude: 10.0,
            translation_rate: 1.0,
            rotation_axis: Vec3::Y,
            rotation_rate: 10.0_f32.to_radians(),
        }
    }
}

impl MotionFunction for WaveMotion {
    fn sample(&self, t: f32) -> Pose {
        let axis = self.translation_axis.normalize_or_zero();
        let position = self.origin + axis * ((t * self.translation_rate).sin() * self.translation_amplitude);
        let rotation = Quat::from_scaled_axis(self.rotation_axis.normalize_or_zero() * (self.rotation_rate * t));
        Pose::new(position, rotation)
    }
}
