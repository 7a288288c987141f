//! Host-engine seam for transform synchronization and commits
//!
//! The orchestrator never talks to the host engine directly; it reports
//! transform commits and synchronization points through this trait. The
//! embedding forwards them to its scene graph and physics world, a headless
//! test passes [`NullWorld`].

use kinetick_core::{CharacterId, PlatformKey, Pose};

/// Callbacks from the orchestrator into the host engine
pub trait WorldHooks {
    /// Force a world-transform synchronization point, making prior external
    /// transform writes visible to subsequent queries. Called at the start
    /// and end of every tick.
    fn sync_transforms(&mut self) {}

    /// A character's transform was committed after phase 2
    fn character_moved(&mut self, id: CharacterId, pose: Pose) {
        let _ = (id, pose);
    }

    /// A platform's transform was committed; covers both the scene transform
    /// and, where the platform carries one, the underlying dynamics body
    fn platform_moved(&mut self, key: PlatformKey, pose: Pose) {
        let _ = (key, pose);
    }
}

/// The no-op world for headless simulation and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullWorld;

impl WorldHooks for NullWorld {}
