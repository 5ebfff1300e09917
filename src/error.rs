use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by palette construction, row building and export
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid range: {channel} channel must be a positive finite number, got {value}")]
    InvalidRange { channel: &'static str, value: f64 },

    #[error("{operation}: invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
        reason: String,
    },

    #[error("failed to export palette to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: ExportFailure,
    },
}

/// Underlying cause of an export failure
#[derive(Debug, Error)]
pub enum ExportFailure {
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unsupported image format for extension {0:?}")]
    UnsupportedFormat(Option<String>),
}

impl PaletteError {
    pub(crate) fn invalid_argument(
        operation: &'static str,
        argument: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            operation,
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn export(path: impl Into<PathBuf>, source: impl Into<ExportFailure>) -> Self {
        Self::Export {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;
