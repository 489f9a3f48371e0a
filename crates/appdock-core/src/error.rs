//! Error types for the data-contract layer

use thiserror::Error;

/// Errors raised while assembling a message with [`crate::MessageBuilder`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// The builder was finalized without a required field being set
    #[error("cannot build message: required field `{field}` is not set")]
    MissingRequiredField { field: &'static str },

    /// An indexed attachment operation addressed a non-existent position
    #[error("attachment position {position} is out of range (list has {len} entries)")]
    IndexOutOfRange { position: usize, len: usize },
}
