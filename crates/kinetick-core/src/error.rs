//! Error types for kinetick-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Identifier 0 is the wire encoding of "no attachment" and can never
    /// name a platform.
    #[error("identifier 0 is reserved for \"no attachment\"")]
    ReservedIdentifier,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
