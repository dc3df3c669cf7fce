//! Error type shared by the map, its configuration and its cursor

use thiserror::Error;

/// Errors surfaced by `BucketMap` construction and traversal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor argument is outside its accepted range
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Human readable description of the accepted range
        reason: String,
    },
    /// The cursor was advanced past its last entry
    #[error("no more entries to traverse")]
    NoSuchElement,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
