use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a single card invocation.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("Invalid JSON in options.")]
    Parse(#[source] serde_json::Error),

    #[error("Unsupported card type: {0}")]
    UnsupportedCard(String),

    #[error("{0}")]
    Validation(String),

    #[error("Card renderer returned empty output.")]
    EmptyOutput,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised by a rendering capability. Messages are surfaced unchanged.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("card service request failed: {0}")]
    Transport(String),

    #[error("card service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Other(String),
}
