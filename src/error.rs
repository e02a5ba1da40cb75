use std::path::PathBuf;

use enough::StopReason;

/// Errors from decoding, encoding, and the fill driver.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("empty image: {cols}x{rows}")]
    EmptyDimensions { cols: usize, rows: usize },

    #[error("dimensions too large: {cols}x{rows}")]
    DimensionsTooLarge { cols: usize, rows: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("seed pixel ({row}, {col}) is outside the {rows}x{cols} image")]
    SeedOutOfBounds {
        row: u64,
        col: u64,
        rows: usize,
        cols: usize,
    },

    #[error("unable to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for Error {
    fn from(r: StopReason) -> Self {
        Error::Cancelled(r)
    }
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Each failure category maps to its own non-zero code: 2 usage,
    /// 3 I/O, 4 format, 5 resource, 1 cancellation.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::SeedOutOfBounds { .. } => 2,
            Error::Io { .. } => 3,
            Error::UnrecognizedFormat
            | Error::InvalidHeader(_)
            | Error::UnsupportedVariant(_)
            | Error::InvalidData(_)
            | Error::EmptyDimensions { .. }
            | Error::UnexpectedEof => 4,
            Error::DimensionsTooLarge { .. } | Error::LimitExceeded(_) => 5,
            Error::Cancelled(_) => 1,
        }
    }
}
