// vicinity-rs/vicinity/src/protocol/frame.rs

use crate::constants::REQUEST_FLAGS;
use crate::protocol::commands::CommandCode;
use crate::types::Uid;

/// Typed builder for addressed ISO 15693 command frames.
///
/// Layout: `[flags(1)] [command(1)] [uid(N)] [payload...]`
///
/// Every command starts with the fixed request flags (`0x22`: addressed,
/// high data rate), the command code and the target UID echoed verbatim.
/// Payload fields are appended through named methods in wire order, so
/// field offsets follow from the identifier length instead of being
/// hard-coded; with the standard 8-byte UID the first payload byte lands
/// at offset 10.
///
/// Pure construction, no I/O; deterministic for given inputs.
pub struct FrameBuilder {
    buf: Vec<u8>,
}

impl FrameBuilder {
    /// Start a frame for `code` addressed to `uid`.
    pub fn new(code: CommandCode, uid: &Uid) -> Self {
        let mut buf = Vec::with_capacity(2 + uid.len() + 8);
        buf.push(REQUEST_FLAGS);
        buf.push(code as u8);
        buf.extend_from_slice(uid.as_bytes());
        Self { buf }
    }

    /// Append a block address field.
    pub fn block_index(mut self, index: u8) -> Self {
        self.buf.push(index);
        self
    }

    /// Append a block count field.
    pub fn block_count(mut self, count: u8) -> Self {
        self.buf.push(count);
        self
    }

    /// Append an Application Family Identifier value.
    pub fn afi(mut self, afi: u8) -> Self {
        self.buf.push(afi);
        self
    }

    /// Append a Data Storage Format Identifier value.
    pub fn dsfid(mut self, dsfid: u8) -> Self {
        self.buf.push(dsfid);
        self
    }

    /// Append raw block data.
    pub fn data(mut self, data: &[u8]) -> Self {
        self.buf.extend_from_slice(data);
        self
    }

    /// Finish and return the frame bytes.
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
