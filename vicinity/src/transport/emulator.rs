// vicinity-rs/vicinity/src/transport/emulator.rs

use crate::constants::{
    ERR_ALREADY_LOCKED, ERR_BLOCK_NOT_AVAILABLE, ERR_LOCKED, ERR_NOT_RECOGNIZED,
    ERR_NOT_SUPPORTED, ERR_WRITE_FAILED, FLAG_ADDRESS, RESPONSE_FLAG_ERROR,
};
use crate::protocol::commands::CommandCode;
use crate::transport::traits::Transceiver;
use crate::{Error, Result};

/// In-memory vicinity tag behind the `Transceiver` trait.
///
/// The emulator parses addressed frames, keeps a block store plus AFI and
/// DSFID registers, and answers with the same status-led responses a real
/// tag produces: `0x00` + payload on success, `0x01` + ISO error code on
/// rejection. Frames addressed to a different identifier get no answer at
/// all, which surfaces as `Error::Timeout` just like a silent tag.
///
/// It speaks the same full-count dialect as the encoders: the count byte of
/// the multi-block commands is taken as the block count itself.
#[derive(Debug)]
pub struct EmulatedVicinityTag {
    uid: Vec<u8>,
    dsfid: u8,
    afi: u8,
    dsfid_locked: bool,
    afi_locked: bool,
    blocks: Vec<Vec<u8>>,
    block_size: usize,
    rejected_blocks: Vec<u8>,
    batch_writes_allowed: bool,
    connected: bool,
    /// Number of completed exchanges, for call-count assertions.
    pub exchanges: usize,
}

impl EmulatedVicinityTag {
    /// A blank tag with the given wire-order identifier and geometry.
    /// Blocks start zeroed, AFI and DSFID start at zero and unlocked.
    pub fn new(uid: &[u8], block_count: usize, block_size: usize) -> Self {
        Self {
            uid: uid.to_vec(),
            dsfid: 0x00,
            afi: 0x00,
            dsfid_locked: false,
            afi_locked: false,
            blocks: vec![vec![0u8; block_size]; block_count],
            block_size,
            rejected_blocks: Vec::new(),
            batch_writes_allowed: false,
            connected: true,
            exchanges: 0,
        }
    }

    /// Make single-block writes to `index` answer "write failed".
    pub fn reject_writes_at(&mut self, index: u8) {
        self.rejected_blocks.push(index);
    }

    /// Accept Write Multiple Blocks. Off by default, matching the many
    /// real tags that answer it with "not supported".
    pub fn allow_batch_writes(&mut self, allow: bool) {
        self.batch_writes_allowed = allow;
    }

    /// Preset the AFI register.
    pub fn set_afi(&mut self, afi: u8) {
        self.afi = afi;
    }

    /// Preset the DSFID register.
    pub fn set_dsfid(&mut self, dsfid: u8) {
        self.dsfid = dsfid;
    }

    /// Preset one block's contents, zero-padded or truncated to the block
    /// size. Out-of-range indices are ignored.
    pub fn load_block(&mut self, index: u8, data: &[u8]) {
        let size = self.block_size;
        if let Some(block) = self.blocks.get_mut(index as usize) {
            let n = data.len().min(size);
            block.fill(0);
            block[..n].copy_from_slice(&data[..n]);
        }
    }

    /// Contents of one block, if it exists.
    pub fn block(&self, index: u8) -> Option<&[u8]> {
        self.blocks.get(index as usize).map(Vec::as_slice)
    }

    /// The whole data area, concatenated in block order.
    pub fn memory(&self) -> Vec<u8> {
        self.blocks.concat()
    }

    pub fn afi(&self) -> u8 {
        self.afi
    }

    pub fn dsfid(&self) -> u8 {
        self.dsfid
    }

    pub fn afi_locked(&self) -> bool {
        self.afi_locked
    }

    pub fn dsfid_locked(&self) -> bool {
        self.dsfid_locked
    }

    fn error(code: u8) -> Vec<u8> {
        vec![RESPONSE_FLAG_ERROR, code]
    }

    fn addressed_to_me(&self, frame: &[u8]) -> bool {
        frame.len() >= 2 + self.uid.len()
            && frame[0] & FLAG_ADDRESS != 0
            && frame[2..2 + self.uid.len()] == self.uid[..]
    }

    /// Payload bytes after the addressed header.
    fn fields<'a>(&self, frame: &'a [u8]) -> &'a [u8] {
        &frame[2 + self.uid.len()..]
    }

    fn system_info_response(&self) -> Vec<u8> {
        let mut resp = vec![0x00, 0x07];
        resp.extend_from_slice(&self.uid);
        resp.push(self.dsfid);
        resp.push(self.afi);
        // Geometry goes out minus one; a zero-block double floors at zero.
        resp.push(self.blocks.len().saturating_sub(1) as u8);
        resp.push(self.block_size.saturating_sub(1) as u8);
        resp
    }

    fn read_block_response(&self, fields: &[u8]) -> Vec<u8> {
        let Some(&index) = fields.first() else {
            return Self::error(ERR_NOT_RECOGNIZED);
        };
        match self.blocks.get(index as usize) {
            Some(block) => {
                let mut resp = vec![0x00];
                resp.extend_from_slice(block);
                resp
            }
            None => Self::error(ERR_BLOCK_NOT_AVAILABLE),
        }
    }

    fn read_blocks_response(&self, fields: &[u8]) -> Vec<u8> {
        let [first, count, ..] = fields else {
            return Self::error(ERR_NOT_RECOGNIZED);
        };
        let (first, count) = (*first as usize, *count as usize);
        if first + count > self.blocks.len() {
            return Self::error(ERR_BLOCK_NOT_AVAILABLE);
        }
        let mut resp = vec![0x00];
        for block in &self.blocks[first..first + count] {
            resp.extend_from_slice(block);
        }
        resp
    }

    fn write_block_response(&mut self, fields: &[u8]) -> Vec<u8> {
        let Some((&index, data)) = fields.split_first() else {
            return Self::error(ERR_NOT_RECOGNIZED);
        };
        if index as usize >= self.blocks.len() {
            return Self::error(ERR_BLOCK_NOT_AVAILABLE);
        }
        if self.rejected_blocks.contains(&index) || data.len() != self.block_size {
            return Self::error(ERR_WRITE_FAILED);
        }
        self.blocks[index as usize] = data.to_vec();
        vec![0x00]
    }

    fn write_blocks_response(&mut self, fields: &[u8]) -> Vec<u8> {
        if !self.batch_writes_allowed {
            return Self::error(ERR_NOT_SUPPORTED);
        }
        let [first, count, data @ ..] = fields else {
            return Self::error(ERR_NOT_RECOGNIZED);
        };
        let (first, count) = (*first as usize, *count as usize);
        if first + count > self.blocks.len() || data.len() != count * self.block_size {
            return Self::error(ERR_WRITE_FAILED);
        }
        for (i, chunk) in data.chunks(self.block_size).enumerate() {
            self.blocks[first + i] = chunk.to_vec();
        }
        vec![0x00]
    }

    fn handle(&mut self, frame: &[u8]) -> Vec<u8> {
        let code = frame[1];
        let fields = self.fields(frame);
        match CommandCode::from_byte(code) {
            Some(CommandCode::SystemInfo) => self.system_info_response(),
            Some(CommandCode::ReadSingleBlock) => self.read_block_response(fields),
            Some(CommandCode::ReadMultipleBlocks) => self.read_blocks_response(fields),
            Some(CommandCode::WriteSingleBlock) => self.write_block_response(fields),
            Some(CommandCode::WriteMultipleBlocks) => self.write_blocks_response(fields),
            Some(CommandCode::WriteAfi) => match (fields.first(), self.afi_locked) {
                (Some(&afi), false) => {
                    self.afi = afi;
                    vec![0x00]
                }
                (Some(_), true) => Self::error(ERR_LOCKED),
                (None, _) => Self::error(ERR_NOT_RECOGNIZED),
            },
            Some(CommandCode::LockAfi) => {
                if self.afi_locked {
                    Self::error(ERR_ALREADY_LOCKED)
                } else {
                    self.afi_locked = true;
                    vec![0x00]
                }
            }
            Some(CommandCode::WriteDsfid) => match (fields.first(), self.dsfid_locked) {
                (Some(&dsfid), false) => {
                    self.dsfid = dsfid;
                    vec![0x00]
                }
                (Some(_), true) => Self::error(ERR_LOCKED),
                (None, _) => Self::error(ERR_NOT_RECOGNIZED),
            },
            Some(CommandCode::LockDsfid) => {
                if self.dsfid_locked {
                    Self::error(ERR_ALREADY_LOCKED)
                } else {
                    self.dsfid_locked = true;
                    vec![0x00]
                }
            }
            None => Self::error(ERR_NOT_RECOGNIZED),
        }
    }
}

impl Transceiver for EmulatedVicinityTag {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<()> {
        self.connected = true;
        Ok(())
    }

    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(Error::Transport("tag left the field".into()));
        }
        if !self.addressed_to_me(frame) {
            return Err(Error::Timeout);
        }
        self.exchanges += 1;
        Ok(self.handle(frame))
    }

    fn close(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }
}
