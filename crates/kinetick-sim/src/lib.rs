//! Kinetick Sim - Deterministic tick orchestration for character motors and
//! moving platforms
//!
//! This crate drives the simulation side of the rollback model:
//!
//! - **Adapters**: `CharacterRig` and `PlatformRig` wrap the external motor
//!   and motion-function collaborators behind the two-phase update contract
//! - **Orchestrator**: `Simulation` owns the ordered registries and runs one
//!   deterministic tick per `run_tick` call
//! - **Seams**: `CharacterMotor`, `MotionFunction` and `WorldHooks` are the
//!   interface boundaries to the motor, the platform motion and the host
//!   engine's transform system
//!
//! # Tick order
//!
//! ```text
//! sync transforms
//!   platforms: velocity update        (target pose + velocities for this tick)
//!   characters: phase 1               (probe + unconstrained velocity,
//!                                      against last tick's platform poses)
//!   platforms: commit transform       (world now shows the new poses)
//!   characters: phase 2 + post        (resolve against the new poses)
//! sync transforms
//! ```
//!
//! Iteration is registry order - registration order, identical on every
//! participant and every resimulation. One entity's output (a platform pose)
//! is another's input within the same tick, so the order is a correctness
//! requirement, not a style choice.

mod character;
mod input;
mod motion;
mod motor;
mod platform;
mod simulation;
mod world;

pub use character::{CharacterConfig, CharacterRig, PostSimulate};
pub use input::{CharacterInput, LookAngles, LookChannel};
pub use motion::{MotionFunction, WaveMotion};
pub use motor::{CharacterMotor, PlatformQuery};
pub use platform::{PlatformRig, PlatformSet};
pub use simulation::{Simulation, TickReport};
pub use world::{NullWorld, WorldHooks};

// Re-export the state types adapters speak in
pub use kinetick_core::{CharacterId, MotorState, MoverState, PlatformKey, Pose};
