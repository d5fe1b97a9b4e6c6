//! Error types for configuration and schema handling.

use thiserror::Error;

/// Errors in the generation configuration itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `count` must be at least 1; a run either produces the full batch or fails.
    #[error("count must be greater than 0, got {0}")]
    InvalidCount(usize),

    #[error("unknown data kind: {0}. Use text, json, conversation, tool_call, or agent_trace")]
    UnknownKind(String),
}

/// Errors raised while parsing a JSON Schema subset into a [`crate::schema::SchemaNode`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported schema type: {0}")]
    UnsupportedType(String),

    /// Cannot uniformly select from an empty candidate set.
    #[error("enum for property '{0}' is empty")]
    EmptyEnum(String),

    /// Record generation needs a top-level object schema, not a bare scalar or array.
    #[error("schema root must be an object, got {0}")]
    NonObjectRoot(String),
}

/// Umbrella error for the generation entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
