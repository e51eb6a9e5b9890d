// vicinity-rs/vicinity/src/types.rs

use crate::{Error, Result};

/// Tag identifier in wire order - Newtype Pattern.
///
/// ISO 15693 UIDs are 64-bit, but the frame layout only depends on the
/// identifier's length, so any non-empty identifier is accepted and all
/// command offsets are derived from [`Uid::len`].
///
/// Platform discovery APIs hand the identifier out in reverse of the order
/// the radio expects, so [`Uid::from_discovery`] reverses the bytes exactly
/// once; the session stores and echoes wire order from then on. The
/// uppercase-hex rendering ([`Uid::to_hex`]) shows the same wire-order bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Build a `Uid` from identifier bytes as read at discovery time,
    /// reversing them end-to-end into wire order.
    pub fn from_discovery(raw: &[u8]) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::EmptyUid);
        }
        let mut bytes = raw.to_vec();
        bytes.reverse();
        Ok(Self(bytes))
    }

    /// Build a `Uid` from bytes already in wire order (no reversal).
    pub fn from_wire(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyUid);
        }
        Ok(Self(bytes))
    }

    /// Wire-order identifier bytes, as echoed inside every addressed frame.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Identifier length in bytes (8 for every real ISO 15693 tag).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: construction rejects empty identifiers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uppercase hex, two digits per byte, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(&self.0)
    }
}
