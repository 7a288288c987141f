//! Relevance - which entities this participant simulates
//!
//! The server simulates everything; a client simulates what it has input or
//! full authority over, plus anything whose prediction scope says everyone
//! predicts it. The embedding evaluates these at spawn and on every
//! authority change, registering and deregistering accordingly.

use crate::{Error, Result};
use kinetick_core::CharacterId;
use kinetick_sim::{CharacterConfig, CharacterMotor, CharacterRig, Simulation};
use serde::{Deserialize, Serialize};

/// This participant's authority over an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authority {
    /// Someone else's entity; we only observe it
    Remote,
    /// Our input drives it (predicted locally)
    Input,
    /// We own it outright
    Full,
}

/// Who predicts an entity besides its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PredictionScope {
    /// Only the input source predicts
    #[default]
    InputSource,
    /// Every participant predicts (globally relevant)
    Everyone,
}

/// Whether this participant must simulate an entity locally
pub fn is_locally_relevant(
    authority: Authority,
    prediction: PredictionScope,
    is_server: bool,
) -> bool {
    is_server
        || matches!(prediction, PredictionScope::Everyone)
        || matches!(authority, Authority::Input | Authority::Full)
}

/// Everything needed to decide and perform one character registration
pub struct SpawnParams {
    pub authority: Authority,
    pub prediction: PredictionScope,
    pub is_server: bool,
    /// The motor adapter, if the entity carries one
    pub motor: Option<Box<dyn CharacterMotor>>,
    pub config: CharacterConfig,
}

/// Register a character if it is locally relevant
///
/// Returns `Ok(None)` when the entity is simply not ours to simulate.
/// A relevant entity without a motor adapter is excluded with
/// [`Error::MissingMotor`]; the simulation and every other entity are
/// unaffected. Calling this twice for the same entity without an
/// intervening deregister is a caller error and creates a duplicate entry.
pub fn admit(sim: &mut Simulation, params: SpawnParams) -> Result<Option<CharacterId>> {
    if !is_locally_relevant(params.authority, params.prediction, params.is_server) {
        return Ok(None);
    }
    let motor = params.motor.ok_or(Error::MissingMotor)?;
    let rig = CharacterRig::with_config(motor, params.config);
    Ok(Some(sim.register_character(rig)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use kinetick_core::{MotorState, PlatformKey, Pose};
    use kinetick_sim::PlatformQuery;

    struct StaticMotor(MotorState);

    impl CharacterMotor for StaticMotor {
        fn update_phase1(&mut self, _dt: f32, _platforms: &dyn PlatformQuery) {}
        fn update_phase2(&mut self, _dt: f32, _platforms: &dyn PlatformQuery) {}

        fn state(&self) -> MotorState {
            self.0
        }

        fn apply_state(&mut self, state: MotorState) {
            self.0 = state;
        }

        fn transient_pose(&self) -> Pose {
            self.0.pose
        }

        fn set_rotation(&mut self, rotation: Quat) {
            self.0.pose.rotation = rotation;
        }

        fn base_velocity(&self) -> Vec3 {
            self.0.base_velocity
        }

        fn attached_platform(&self) -> Option<PlatformKey> {
            self.0.attached_platform
        }
    }

    #[test]
    fn test_relevance_matrix() {
        use Authority::*;
        use PredictionScope::*;

        // Server simulates everything
        assert!(is_locally_relevant(Remote, InputSource, true));
        // Input and full authority simulate regardless of scope
        assert!(is_locally_relevant(Input, InputSource, false));
        assert!(is_locally_relevant(Full, InputSource, false));
        // Globally predicted entities simulate on every client
        assert!(is_locally_relevant(Remote, Everyone, false));
        // A plain remote proxy does not
        assert!(!is_locally_relevant(Remote, InputSource, false));
    }

    #[test]
    fn test_admit_irrelevant_entity_is_not_registered() {
        let mut sim = Simulation::new();
        let admitted = admit(
            &mut sim,
            SpawnParams {
                authority: Authority::Remote,
                prediction: PredictionScope::InputSource,
                is_server: false,
                motor: Some(Box::new(StaticMotor(MotorState::default()))),
                config: CharacterConfig::default(),
            },
        )
        .unwrap();

        assert!(admitted.is_none());
        assert_eq!(sim.character_count(), 0);
    }

    #[test]
    fn test_admit_relevant_entity() {
        let mut sim = Simulation::new();
        let admitted = admit(
            &mut sim,
            SpawnParams {
                authority: Authority::Input,
                prediction: PredictionScope::InputSource,
                is_server: false,
                motor: Some(Box::new(StaticMotor(MotorState::default()))),
                config: CharacterConfig::default(),
            },
        )
        .unwrap();

        let id = admitted.expect("input authority must register");
        assert!(sim.character(id).is_some());
    }

    #[test]
    fn test_admit_without_motor_excludes_only_that_entity() {
        let mut sim = Simulation::new();
        admit(
            &mut sim,
            SpawnParams {
                authority: Authority::Full,
                prediction: PredictionScope::InputSource,
                is_server: false,
                motor: Some(Box::new(StaticMotor(MotorState::default()))),
                config: CharacterConfig::default(),
            },
        )
        .unwrap();

        let missing = admit(
            &mut sim,
            SpawnParams {
                authority: Authority::Full,
                prediction: PredictionScope::InputSource,
                is_server: false,
                motor: None,
                config: CharacterConfig::default(),
            },
        );

        assert!(matches!(missing, Err(Error::MissingMotor)));
        // The earlier registration is untouched and the tick still runs
        assert_eq!(sim.character_count(), 1);
        let report = sim.run_tick(0.02);
        assert_eq!(report.simulated, 1);
    }
}
