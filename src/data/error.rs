use thiserror::Error;

/// The single failure kind of the ingest pipeline.
///
/// Every way an upload can be malformed surfaces as one of these variants
/// with a human-readable cause; the caller reports the message and waits
/// for a corrected upload. Nothing is retried or silently defaulted.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload has no '<metadata>,<base64>' comma separator")]
    MissingSeparator,

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("row {row}: token '{token}' is not numeric")]
    NonNumeric { row: usize, token: String },

    #[error("row {row} has {actual} columns but row 0 has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} position columns, found {actual}")]
    ChannelCount { expected: usize, actual: usize },

    #[error("decoded payload contains no data rows")]
    EmptyInput,
}
