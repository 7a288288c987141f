//! Input carrier and look-angle bookkeeping
//!
//! Input polling belongs to the embedding; this module only defines the
//! canonical per-tick input value and the deterministic look-angle
//! integration that every participant must agree on. Whether both look
//! axes replicate or only pitch (yaw then derives from the committed
//! rotation) is a [`LookChannel`] choice, not a separate implementation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One tick of character input
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterInput {
    /// Raw movement axes; clamp through [`CharacterInput::clamped_movement`]
    /// before feeding locomotion
    pub movement: Vec2,
    /// Look delta in degrees, `(yaw, pitch)`
    pub look_delta: Vec2,
    pub jump: bool,
    pub sprint: bool,
    pub crouch: bool,
}

impl CharacterInput {
    /// Movement axes clamped to unit length, so diagonals are no faster
    pub fn clamped_movement(&self) -> Vec2 {
        self.movement.clamp_length_max(1.0)
    }
}

/// Which look axes are tracked as replicated state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LookChannel {
    /// Yaw and pitch both integrate here
    #[default]
    YawPitch,
    /// Only pitch integrates here; yaw lives in the committed rotation
    PitchOnly,
}

/// Accumulated look angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    /// Integrate one tick's look delta
    ///
    /// Yaw wraps at a full turn and pitch clamps to straight up/down;
    /// both are applied identically on every participant.
    pub fn integrate(&mut self, delta: Vec2, channel: LookChannel) {
        if matches!(channel, LookChannel::YawPitch) {
            self.yaw = wrap_angle(self.yaw + delta.x, -360.0, 360.0);
        }
        self.pitch = wrap_angle(self.pitch + delta.y, -90.0, 90.0);
    }

    /// Integrate the look delta of a full input value
    pub fn apply(&mut self, input: &CharacterInput, channel: LookChannel) {
        self.integrate(input.look_delta, channel);
    }
}

fn wrap_angle(angle: f32, min: f32, max: f32) -> f32 {
    let mut angle = angle;
    if angle <= -360.0 {
        angle += 360.0;
    }
    if angle >= 360.0 {
        angle -= 360.0;
    }
    angle.clamp(min, max)
}
