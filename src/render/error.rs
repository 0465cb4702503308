//! Error definitions for the render pipeline.

use thiserror::Error;

/// Errors that can occur while rendering equations to a PDF.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The request payload could not be decoded into equation fragments.
    #[error("{0}")]
    InvalidInput(String),

    /// The LaTeX compiler exited non-zero, or reported success without
    /// producing the expected artifact. Carries the compiler's combined
    /// stdout/stderr for diagnosis.
    #[error("LaTeX compilation failed: {detail}")]
    CompilationFailed { detail: String },

    /// Filesystem or subprocess-spawn failure on the render path.
    #[error("render I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn compilation_failed(detail: impl Into<String>) -> Self {
        Self::CompilationFailed {
            detail: detail.into(),
        }
    }

    /// Whether the error is the caller's fault (HTTP 400) rather than a
    /// server-side failure (HTTP 500).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
