// vicinity-rs/vicinity/src/protocol/responses/info.rs

use crate::error::Result;
use crate::protocol::parser::{byte_at, slice_at};

/// Raw fields of a Get System Information response.
///
/// Geometry bytes stay in wire form here (count and size both minus one);
/// the session layer owns the `+1` decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfoResponse {
    pub info_flags: u8,
    pub uid_echo: Vec<u8>,
    pub dsfid: u8,
    pub afi: u8,
    pub block_count_raw: u8,
    pub block_size_raw: u8,
}

/// Decode a Get System Information response for a tag whose identifier is
/// `uid_len` bytes long.
///
/// Field offsets float with the identifier length: flags at 1, identifier
/// echo at 2, then DSFID, AFI, block count and block size. Only the length
/// is validated; the status flag is left to the caller, matching how
/// readers in the field consume this response.
pub fn decode_system_info(response: &[u8], uid_len: usize) -> Result<SystemInfoResponse> {
    let uid_echo = slice_at(response, 2, uid_len)?;

    Ok(SystemInfoResponse {
        info_flags: byte_at(response, 1)?,
        uid_echo: uid_echo.to_vec(),
        dsfid: byte_at(response, 2 + uid_len)?,
        afi: byte_at(response, 3 + uid_len)?,
        block_count_raw: byte_at(response, 4 + uid_len)?,
        block_size_raw: byte_at(response, 5 + uid_len)?,
    })
}
