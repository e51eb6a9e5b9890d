// vicinity-rs/vicinity/src/constants.rs
//! Common ISO 15693 protocol constants used across the crate

/// Request flags sent with every command: addressed mode + high data rate.
pub const REQUEST_FLAGS: u8 = FLAG_HIGH_DATA_RATE | FLAG_ADDRESS;

/// Request flag bit 2: high data rate (26.48 kbit/s).
pub const FLAG_HIGH_DATA_RATE: u8 = 0x02;

/// Request flag bit 6: addressed mode, the frame carries the target UID.
pub const FLAG_ADDRESS: u8 = 0x20;

/// Response flags bit 1: the tag reports an error; byte 1 is an error code.
pub const RESPONSE_FLAG_ERROR: u8 = 0x01;

/// ISO 15693 UIDs are 64-bit.
pub const UID_LEN: usize = 8;

/// Tag error code: command not supported.
pub const ERR_NOT_SUPPORTED: u8 = 0x01;
/// Tag error code: command not recognised.
pub const ERR_NOT_RECOGNIZED: u8 = 0x02;
/// Tag error code: unknown error.
pub const ERR_UNKNOWN: u8 = 0x0F;
/// Tag error code: the addressed block does not exist.
pub const ERR_BLOCK_NOT_AVAILABLE: u8 = 0x10;
/// Tag error code: the target is already locked.
pub const ERR_ALREADY_LOCKED: u8 = 0x11;
/// Tag error code: the target is locked and cannot be changed.
pub const ERR_LOCKED: u8 = 0x12;
/// Tag error code: programming failed.
pub const ERR_WRITE_FAILED: u8 = 0x13;
/// Tag error code: locking failed.
pub const ERR_LOCK_FAILED: u8 = 0x14;
