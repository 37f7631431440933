/// Serializable output types.
///
/// Answers are written to stdout as plain text; only the error envelope has a
/// structured form.
use serde::{Deserialize, Serialize};

use crate::query::QueryError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Process exit code the run ends with.
    pub exit_code: i32,
}

impl ErrorOutput {
    /// Construct from a `QueryError`.
    #[must_use]
    pub fn from_query_error(err: &QueryError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                exit_code: err.exit_code(),
            },
        }
    }
}
