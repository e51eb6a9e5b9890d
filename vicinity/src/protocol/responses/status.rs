// vicinity-rs/vicinity/src/protocol/responses/status.rs
//
// Every response opens with a status byte: zero for success, a tag error
// code otherwise. Tag errors are logical outcomes, not transport faults,
// so callers get them as values rather than `Err`.

use crate::constants::{
    ERR_ALREADY_LOCKED, ERR_BLOCK_NOT_AVAILABLE, ERR_LOCKED, ERR_LOCK_FAILED, ERR_NOT_RECOGNIZED,
    ERR_NOT_SUPPORTED, ERR_UNKNOWN, ERR_WRITE_FAILED,
};
use crate::error::{Error, Result};

/// Extract the leading status byte, failing on an empty response.
pub fn response_status(response: &[u8]) -> Result<u8> {
    response.first().copied().ok_or(Error::ResponseTooShort {
        expected: 1,
        actual: 0,
    })
}

/// Zero means the tag accepted the command.
pub fn is_success(status: u8) -> bool {
    status == 0x00
}

/// Human-readable name for a tag error status, for log lines.
pub fn error_name(status: u8) -> &'static str {
    match status {
        ERR_NOT_SUPPORTED => "command not supported",
        ERR_NOT_RECOGNIZED => "command not recognized",
        ERR_UNKNOWN => "unknown error",
        ERR_BLOCK_NOT_AVAILABLE => "block not available",
        ERR_ALREADY_LOCKED => "block already locked",
        ERR_LOCKED => "block locked",
        ERR_WRITE_FAILED => "write failed",
        ERR_LOCK_FAILED => "lock failed",
        _ => "unrecognized status",
    }
}
