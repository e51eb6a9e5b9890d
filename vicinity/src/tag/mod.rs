// vicinity-rs/vicinity/src/tag/mod.rs

//! Tag session: a type-state handle over one physical tag contact.
//!
//! `Tag::new` captures the identifier and the transceiver; `initialize()`
//! runs the one system-information exchange and moves the session to
//! `Ready`, where all block and register operations live. The compiler
//! rules out reads and writes before the geometry is known.

use log::{debug, trace};

use crate::protocol::commands::Command;
use crate::protocol::responses::SystemInfoResponse;
use crate::transport::Transceiver;
use crate::types::Uid;
use crate::utils::hex;
use crate::{Error, Result};

pub mod info;
pub mod operations;

pub use info::TagInfo;

mod sealed {
    pub trait Sealed {}
}

/// Session states. `Uninitialized` knows nothing beyond the identifier;
/// `Ready` carries the geometry from the system-information exchange.
pub trait TagState: sealed::Sealed {
    /// Geometry, if this state has it.
    fn info(&self) -> Option<&TagInfo>;
}

/// State before the system-information exchange.
pub struct Uninitialized;

/// State after a successful `initialize()`.
pub struct Ready {
    info: TagInfo,
}

impl sealed::Sealed for Uninitialized {}
impl sealed::Sealed for Ready {}

impl TagState for Uninitialized {
    fn info(&self) -> Option<&TagInfo> {
        None
    }
}

impl TagState for Ready {
    fn info(&self) -> Option<&TagInfo> {
        Some(&self.info)
    }
}

/// Handle for one tag contact, enforcing initialize-before-read at compile
/// time.
pub struct Tag<S: TagState = Uninitialized> {
    uid: Uid,
    transceiver: Box<dyn Transceiver>,
    state: S,
}

impl<S: TagState> Tag<S> {
    /// Identifier in wire order.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Identifier as uppercase hex, no separators.
    pub fn uid_hex(&self) -> String {
        self.uid.to_hex()
    }

    /// Geometry regardless of state: `Error::NotInitialized` before
    /// `initialize()` has run.
    pub fn try_info(&self) -> Result<&TagInfo> {
        self.state.info().ok_or(Error::NotInitialized)
    }

    /// Release the link. The next operation reconnects through the guard.
    pub fn close(&mut self) -> Result<()> {
        debug!("closing session for {}", self.uid.to_hex());
        self.transceiver.close()
    }

    /// Connection guard run before every exchange: a no-op on a live link,
    /// one reconnect attempt otherwise. A failed attempt surfaces as
    /// `Error::ConnectFailed` whatever the transceiver reported.
    fn ensure_connected(&mut self) -> Result<()> {
        if self.transceiver.is_connected() {
            return Ok(());
        }
        debug!("link down, reconnecting to {}", self.uid.to_hex());
        self.transceiver.connect().map_err(|_| Error::ConnectFailed)
    }

    /// Shared dispatch path: guard, encode, one exchange.
    fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.ensure_connected()?;
        let frame = cmd.encode(&self.uid);
        trace!("{} >> {}", cmd.code(), hex::bytes_to_hex_spaced(&frame));
        let response = self.transceiver.transceive(&frame)?;
        trace!("{} << {}", cmd.code(), hex::bytes_to_hex_spaced(&response));
        Ok(response)
    }
}

impl Tag<Uninitialized> {
    /// Open a session from the identifier bytes as discovered, which arrive
    /// reversed relative to wire order. The reversal happens here, exactly
    /// once.
    pub fn new(discovery_id: &[u8], transceiver: Box<dyn Transceiver>) -> Result<Self> {
        let uid = Uid::from_discovery(discovery_id)?;
        debug!("session opened for {}", uid.to_hex());
        Ok(Self {
            uid,
            transceiver,
            state: Uninitialized,
        })
    }

    /// Open a session from an identifier already in wire order (emulators,
    /// replayed captures).
    pub fn with_wire_uid(uid: Uid, transceiver: Box<dyn Transceiver>) -> Self {
        Self {
            uid,
            transceiver,
            state: Uninitialized,
        }
    }

    /// Query the tag's system information and move to `Ready`.
    pub fn initialize(mut self) -> Result<Tag<Ready>> {
        let decoded = operations::read::query_system_info(&mut self)?;
        let info = TagInfo::from(&decoded);
        debug!(
            "tag {} ready: {} blocks of {} bytes, afi {}, dsfid {}",
            self.uid.to_hex(),
            info.block_count(),
            info.block_size(),
            info.afi_hex(),
            info.dsfid_hex()
        );
        Ok(Tag {
            uid: self.uid,
            transceiver: self.transceiver,
            state: Ready { info },
        })
    }
}

impl Tag<Ready> {
    /// Cached geometry. Infallible here: `Ready` cannot exist without it.
    pub fn info(&self) -> &TagInfo {
        &self.state.info
    }

    /// Re-issue the system-information query without touching the cached
    /// geometry. Diagnostics only.
    pub fn system_info(&mut self) -> Result<SystemInfoResponse> {
        operations::read::query_system_info(self)
    }

    /// Read one block. `Ok(None)` when the tag reports an error status.
    pub fn read_block(&mut self, index: u8) -> Result<Option<Vec<u8>>> {
        operations::read::read_block(self, index)
    }

    /// Read the whole data area in one exchange. See
    /// [`crate::protocol::responses::batch_read_window`] for the exact
    /// shape of the returned buffer.
    pub fn read_all_blocks(&mut self) -> Result<Option<Vec<u8>>> {
        operations::read::read_all_blocks(self)
    }

    /// Read the whole data area and decode it as UTF-8, lossily.
    pub fn read_all(&mut self) -> Result<Option<String>> {
        operations::read::read_all(self)
    }

    /// Write one block. `data` must be exactly one block long; the length
    /// is checked before anything goes over the air. `Ok(false)` when the
    /// tag rejects the write.
    pub fn write_block(&mut self, index: u8, data: &[u8]) -> Result<bool> {
        operations::write::write_block(self, index, data)
    }

    /// Zero every block, sequentially. Per-block rejections are logged and
    /// skipped; transport failures still abort.
    pub fn clear_all_blocks(&mut self) -> Result<bool> {
        operations::write::clear_all_blocks(self)
    }

    /// Zero every block, aborting at the first rejection with
    /// `Error::BlockRejected`.
    pub fn clear_all_blocks_strict(&mut self) -> Result<()> {
        operations::write::clear_all_blocks_strict(self)
    }

    /// Clear the tag, then write `text` across blocks from index 0. Text
    /// beyond the tag's capacity is silently truncated; per-block
    /// rejections are logged and skipped. Empty input succeeds without
    /// touching the tag.
    pub fn write_string(&mut self, text: &str) -> Result<bool> {
        operations::write::write_string(self, text)
    }

    /// Like [`Tag::write_string`] but aborting at the first rejected block
    /// with `Error::BlockRejected`.
    pub fn write_string_strict(&mut self, text: &str) -> Result<()> {
        operations::write::write_string_strict(self, text)
    }

    /// Write `text` in a single Write Multiple Blocks exchange. Many real
    /// tags answer this command with "not supported"; the per-block
    /// [`Tag::write_string`] is the portable path.
    pub fn write_string_batch(&mut self, text: &str) -> Result<bool> {
        operations::write::write_string_batch(self, text)
    }

    /// Set the Application Family Identifier.
    pub fn write_afi(&mut self, afi: u8) -> Result<bool> {
        operations::config::write_afi(self, afi)
    }

    /// Lock the AFI. Irreversible on the physical tag; no local guard.
    pub fn lock_afi(&mut self) -> Result<bool> {
        operations::config::lock_afi(self)
    }

    /// Set the Data Storage Format Identifier.
    pub fn write_dsfid(&mut self, dsfid: u8) -> Result<bool> {
        operations::config::write_dsfid(self, dsfid)
    }

    /// Lock the DSFID. Irreversible on the physical tag; no local guard.
    pub fn lock_dsfid(&mut self) -> Result<bool> {
        operations::config::lock_dsfid(self)
    }
}
