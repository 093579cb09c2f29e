//! Error types for descriptor loading and lookup.

use thiserror::Error;

use crate::key::ConfigKey;

/// Descriptor error type.
///
/// A loader refuses to produce a partially populated descriptor: every
/// variant below fails the whole operation, never a single field.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing required key: {key}")]
    MissingKey { key: ConfigKey },

    #[error("duplicate key {key} on line {line}")]
    DuplicateKey { key: ConfigKey, line: usize },

    #[error("unknown configuration key: {name}")]
    UnknownKey { name: String },

    #[error("invalid line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: ConfigKey, reason: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DescriptorError>;
