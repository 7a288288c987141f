//! Kinetick Core - State transcoding for deterministic character rollback
//!
//! This crate provides the data layer shared by the simulation and the
//! replication glue:
//! - Identity types (`NetworkId`, `PlatformKey`, `CharacterId`)
//! - Transient simulation state (`MotorState`, `MoverState`, `Pose`)
//! - Replicable snapshots (`CharacterSnapshot`, `PlatformSnapshot`)
//! - The snapshot codec (`SnapshotCodec`)
//! - The attachment registry (`AttachmentRegistry`)
//!
//! ## Transient state vs snapshot
//!
//! The motor's transient state (`MotorState`) references live platforms by
//! `PlatformKey`, a local handle that is meaningless on other participants.
//! A snapshot is the compact wire form of that state: every field is plain
//! data, and the attachment is a stable `NetworkId` resolved through the
//! `AttachmentRegistry` in both directions. Resolution can fail during
//! rollback (the platform may not exist locally yet); the codec degrades the
//! attachment to "none" instead of erroring.

mod codec;
mod error;
mod identity;
mod registry;
mod snapshot;
mod state;

pub use codec::{CodecConfig, SnapshotCodec};
pub use error::{Error, Result};
pub use identity::{CharacterId, NetworkId, PlatformKey};
pub use registry::AttachmentRegistry;
pub use snapshot::{CharacterSnapshot, PlatformSnapshot};
pub use state::{GroundingReport, MotorState, MoverState, Pose};
