pub mod ops;
pub mod ppm;

/// Reasons a PPM/P3 stream fails to decode.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a P3 PPM stream")]
    BadMagic,

    #[error("incomplete PPM header")]
    IncompleteHeader,

    #[error("invalid integer token `{0}`")]
    InvalidToken(String),

    #[error("unsupported max channel value {0}")]
    UnsupportedMaxValue(u32),

    #[error("channel value {0} exceeds 255")]
    ChannelOutOfRange(u32),

    #[error("expected {expected} channel values, found {found}")]
    PixelCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, FormatError>;
