use thiserror::Error;
use wr_respond::{CollectError, RenderError};

/// Failure of the response codec.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Unmarshal not supported")]
    UnmarshalUnsupported,
}
