// vicinity-rs/vicinity/src/protocol/commands/config.rs
//
// AFI / DSFID configuration commands. The two lock commands are
// irreversible on real tags.

use crate::protocol::commands::CommandCode;
use crate::protocol::frame::FrameBuilder;
use crate::types::Uid;

/// Encode Write AFI.
pub fn encode_write_afi(uid: &Uid, afi: u8) -> Vec<u8> {
    FrameBuilder::new(CommandCode::WriteAfi, uid).afi(afi).build()
}

/// Encode Lock AFI.
pub fn encode_lock_afi(uid: &Uid) -> Vec<u8> {
    FrameBuilder::new(CommandCode::LockAfi, uid).build()
}

/// Encode Write DSFID.
pub fn encode_write_dsfid(uid: &Uid, dsfid: u8) -> Vec<u8> {
    FrameBuilder::new(CommandCode::WriteDsfid, uid).dsfid(dsfid).build()
}

/// Encode Lock DSFID.
pub fn encode_lock_dsfid(uid: &Uid) -> Vec<u8> {
    FrameBuilder::new(CommandCode::LockDsfid, uid).build()
}
