use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormError>;

#[derive(Debug, Error)]
pub enum NormError {
    /// Line numbers are 1-based, counting blank lines.
    #[error("malformed record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("record encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
