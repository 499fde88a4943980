//! Errors that abort a generation run.

use std::path::PathBuf;

use thiserror::Error;

use crate::templates::{DescriptorError, FetchError};

/// Fatal generation errors.
///
/// A missing per-chain descriptor is not an error; it is reported as
/// [`ChainOutcome::Skipped`](crate::generate::ChainOutcome::Skipped).
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A fixed template could not be fetched, or the descriptor fetch failed
    /// for a reason other than an error status.
    #[error(transparent)]
    TemplateFetch(#[from] FetchError),

    /// The rendered descriptor for `chain` is not a usable descriptor.
    #[error("malformed bridge descriptor for {chain}: {source}")]
    MalformedTemplate {
        chain: String,
        #[source]
        source: DescriptorError,
    },

    /// A template failed to render.
    #[error("failed to render template {url}: {source}")]
    Render {
        url: String,
        #[source]
        source: minijinja::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata file could not be serialized.
    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The request cannot be processed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;
