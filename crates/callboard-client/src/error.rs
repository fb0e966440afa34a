//! Error types for loading data and submitting forms.

use thiserror::Error;

/// Errors raised while fetching data files or posting a submission.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A data file could not be fetched or read.
    #[error("failed to fetch {source_name}: {message}")]
    Fetch {
        source_name: String,
        message: String,
    },

    /// A data file was fetched but is not a JSON array of records.
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("submission rejected with status {status}")]
    Rejected { status: u16 },

    /// A transport-level failure from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A configured URL or path could not be resolved.
    #[error("invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// An error propagated from the core layer.
    #[error(transparent)]
    Core(#[from] callboard_core::Error),
}

impl ClientError {
    /// `true` for errors raised while loading a data file.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Parse { .. })
    }

    /// `true` for errors raised while posting a submission.
    pub fn is_submit_failure(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Request(_))
    }
}

/// Convenience alias for client results.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
