// vicinity-rs/vicinity/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// Tag-side rejections (nonzero response status) are deliberately NOT errors
/// in the lenient API: operations report them as `Ok(false)` / `Ok(None)` and
/// callers check return values. Only the `_strict` variants surface a
/// rejection as [`Error::BlockRejected`].
#[derive(Error, Debug)]
pub enum Error {
    /// The RF link could not be (re)established. Recoverable by user action:
    /// re-present the tag and hold it still. Callers are expected to
    /// special-case this variant; every other transport failure is opaque.
    #[error("tag connection failed")]
    ConnectFailed,

    /// The exchange itself failed inside the transceiver.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transceiver gave up waiting for the tag.
    #[error("operation timed out")]
    Timeout,

    /// A response arrived but is shorter than the command's layout requires.
    #[error("response too short: expected at least {expected} bytes, got {actual}")]
    ResponseTooShort { expected: usize, actual: usize },

    /// A tag identifier must carry at least one byte.
    #[error("empty tag identifier")]
    EmptyUid,

    /// Block write payloads must be exactly one block long.
    #[error("invalid block data length: expected {expected}, got {actual}")]
    BlockLength { expected: usize, actual: usize },

    /// Strict write loops stop at the first block the tag rejects.
    #[error("tag rejected write at block {index}: status {status:#04x}")]
    BlockRejected { index: u8, status: u8 },

    /// Geometry was queried before the session reached the `Ready` state.
    #[error("tag session not initialized")]
    NotInitialized,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
