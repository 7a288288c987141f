//! Error types for kinetick-replication

use kinetick_core::{CharacterId, PlatformKey};
use thiserror::Error;

/// Replication glue error type
#[derive(Error, Debug)]
pub enum Error {
    /// An entity passed the relevance gate but carries no motor adapter;
    /// it is excluded from simulation, nothing else is affected
    #[error("entity has no character motor adapter")]
    MissingMotor,

    /// Sync was asked about a character the simulation does not know
    #[error("character not registered: {0}")]
    UnknownCharacter(CharacterId),

    /// Sync was asked about a platform the simulation does not know
    #[error("platform not registered: {0}")]
    UnknownPlatform(PlatformKey),
}

/// Result type for replication operations
pub type Result<T> = std::result::Result<T, Error>;
