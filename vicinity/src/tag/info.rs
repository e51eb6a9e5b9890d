// vicinity-rs/vicinity/src/tag/info.rs

use crate::protocol::responses::SystemInfoResponse;

/// Geometry and identifiers a tag reports about itself, cached once per
/// session.
///
/// Block count and size are stored exactly as transmitted, which is one
/// less than the real value; the accessors add the one back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagInfo {
    dsfid: u8,
    afi: u8,
    block_count_raw: u8,
    block_size_raw: u8,
}

impl TagInfo {
    /// Build from raw wire fields (both geometry bytes minus one).
    pub fn new(dsfid: u8, afi: u8, block_count_raw: u8, block_size_raw: u8) -> Self {
        Self {
            dsfid,
            afi,
            block_count_raw,
            block_size_raw,
        }
    }

    /// Data Storage Format Identifier.
    pub fn dsfid(&self) -> u8 {
        self.dsfid
    }

    /// Application Family Identifier.
    pub fn afi(&self) -> u8 {
        self.afi
    }

    /// Number of blocks in the data area, always at least 1.
    pub fn block_count(&self) -> usize {
        self.block_count_raw as usize + 1
    }

    /// Bytes per block, always at least 1.
    pub fn block_size(&self) -> usize {
        self.block_size_raw as usize + 1
    }

    /// Total data area in bytes.
    pub fn capacity(&self) -> usize {
        self.block_count() * self.block_size()
    }

    /// AFI as a two-digit uppercase hex string.
    pub fn afi_hex(&self) -> String {
        format!("{:02X}", self.afi)
    }

    /// DSFID as a two-digit uppercase hex string.
    pub fn dsfid_hex(&self) -> String {
        format!("{:02X}", self.dsfid)
    }
}

impl From<&SystemInfoResponse> for TagInfo {
    fn from(resp: &SystemInfoResponse) -> Self {
        TagInfo::new(
            resp.dsfid,
            resp.afi,
            resp.block_count_raw,
            resp.block_size_raw,
        )
    }
}
