//! Error types and exit codes for graphanim
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, encoding)
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (unknown vertex, missing edge, bad graph literal)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::{Edge, VertexId};

/// Exit codes for the graphanim binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph literal or operation parameters do not fit (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or rendering demonstrations
#[derive(Error, Debug)]
pub enum GraphAnimError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown start vertex: {vertex}")]
    UnknownStartVertex { vertex: VertexId },

    #[error("edge {edge} references unknown vertex {vertex}")]
    UnknownEdgeEndpoint { edge: Edge, vertex: VertexId },

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: VertexId },

    #[error("edge not found: {edge}")]
    EdgeNotFound { edge: Edge },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("failed to write animation {path:?}: {reason}")]
    ExportFailed { path: PathBuf, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GraphAnimError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphAnimError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphAnimError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        GraphAnimError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphAnimError::UnknownFormat(_)
            | GraphAnimError::UnknownOperation(_)
            | GraphAnimError::UsageError(_)
            | GraphAnimError::InvalidValue { .. } => ExitCode::Usage,

            GraphAnimError::UnknownStartVertex { .. }
            | GraphAnimError::UnknownEdgeEndpoint { .. }
            | GraphAnimError::VertexNotFound { .. }
            | GraphAnimError::EdgeNotFound { .. }
            | GraphAnimError::AlreadyExists { .. } => ExitCode::Data,

            GraphAnimError::Io(_)
            | GraphAnimError::Image(_)
            | GraphAnimError::Json(_)
            | GraphAnimError::Toml(_)
            | GraphAnimError::FailedOperationWithTarget { .. }
            | GraphAnimError::ExportFailed { .. }
            | GraphAnimError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphAnimError::UnknownFormat(_) => "unknown_format",
            GraphAnimError::UnknownOperation(_) => "unknown_operation",
            GraphAnimError::UsageError(_) => "usage_error",
            GraphAnimError::InvalidValue { .. } => "invalid_value",
            GraphAnimError::UnknownStartVertex { .. } => "unknown_start_vertex",
            GraphAnimError::UnknownEdgeEndpoint { .. } => "unknown_edge_endpoint",
            GraphAnimError::VertexNotFound { .. } => "vertex_not_found",
            GraphAnimError::EdgeNotFound { .. } => "edge_not_found",
            GraphAnimError::AlreadyExists { .. } => "already_exists",
            GraphAnimError::Io(_) => "io_error",
            GraphAnimError::Image(_) => "image_error",
            GraphAnimError::Json(_) => "json_error",
            GraphAnimError::Toml(_) => "toml_error",
            GraphAnimError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphAnimError::ExportFailed { .. } => "export_failed",
            GraphAnimError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphanim operations
pub type Result<T> = std::result::Result<T, GraphAnimError>;
