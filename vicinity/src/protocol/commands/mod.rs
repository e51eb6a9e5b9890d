// vicinity-rs/vicinity/src/protocol/commands/mod.rs

use derive_more::Display;

use crate::types::Uid;

pub mod config;
pub mod info;
pub mod read;
pub mod write;

pub use config::{encode_lock_afi, encode_lock_dsfid, encode_write_afi, encode_write_dsfid};
pub use info::encode_system_info;
pub use read::{encode_read_block, encode_read_blocks};
pub use write::{encode_write_block, encode_write_blocks};

/// The closed ISO 15693 command table used by this crate, one byte each.
///
/// Centralizing the codes here keeps magic numbers out of the call sites;
/// new commands should be added here and their encoder placed in
/// `protocol::commands::<family>.rs`.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    /// Read one block.
    #[display(fmt = "ReadSingleBlock")]
    ReadSingleBlock = 0x20,
    /// Write one block.
    #[display(fmt = "WriteSingleBlock")]
    WriteSingleBlock = 0x21,
    /// Read a run of blocks in one exchange.
    #[display(fmt = "ReadMultipleBlocks")]
    ReadMultipleBlocks = 0x23,
    /// Write a run of blocks in one exchange (rejected by many tags).
    #[display(fmt = "WriteMultipleBlocks")]
    WriteMultipleBlocks = 0x24,
    /// Set the Application Family Identifier.
    #[display(fmt = "WriteAfi")]
    WriteAfi = 0x27,
    /// Irreversibly lock the AFI.
    #[display(fmt = "LockAfi")]
    LockAfi = 0x28,
    /// Set the Data Storage Format Identifier.
    #[display(fmt = "WriteDsfid")]
    WriteDsfid = 0x29,
    /// Irreversibly lock the DSFID.
    #[display(fmt = "LockDsfid")]
    LockDsfid = 0x2A,
    /// Query tag geometry and identifiers.
    #[display(fmt = "GetSystemInfo")]
    SystemInfo = 0x2B,
}

impl CommandCode {
    /// Map a raw command byte back to the table (emulator / diagnostics).
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x20 => Some(Self::ReadSingleBlock),
            0x21 => Some(Self::WriteSingleBlock),
            0x23 => Some(Self::ReadMultipleBlocks),
            0x24 => Some(Self::WriteMultipleBlocks),
            0x27 => Some(Self::WriteAfi),
            0x28 => Some(Self::LockAfi),
            0x29 => Some(Self::WriteDsfid),
            0x2A => Some(Self::LockDsfid),
            0x2B => Some(Self::SystemInfo),
            _ => None,
        }
    }
}

/// High-level command with its typed parameters. New commands should be
/// added here together with their `CommandCode` entry.
#[derive(Debug, Clone)]
pub enum Command {
    /// Get System Information: zero payload.
    SystemInfo,
    /// Read a single block.
    ReadBlock {
        index: u8,
    },
    /// Read `count` blocks starting at `first`.
    ReadBlocks {
        first: u8,
        count: u8,
    },
    /// Write a single block.
    WriteBlock {
        index: u8,
        data: Vec<u8>,
    },
    /// Write `count` blocks starting at `first` in one exchange.
    WriteBlocks {
        first: u8,
        count: u8,
        data: Vec<u8>,
    },
    /// Set the AFI register.
    WriteAfi {
        afi: u8,
    },
    /// Lock the AFI register.
    LockAfi,
    /// Set the DSFID register.
    WriteDsfid {
        dsfid: u8,
    },
    /// Lock the DSFID register.
    LockDsfid,
}

impl Command {
    /// The command's entry in the code table.
    pub fn code(&self) -> CommandCode {
        match self {
            Self::SystemInfo => CommandCode::SystemInfo,
            Self::ReadBlock { .. } => CommandCode::ReadSingleBlock,
            Self::ReadBlocks { .. } => CommandCode::ReadMultipleBlocks,
            Self::WriteBlock { .. } => CommandCode::WriteSingleBlock,
            Self::WriteBlocks { .. } => CommandCode::WriteMultipleBlocks,
            Self::WriteAfi { .. } => CommandCode::WriteAfi,
            Self::LockAfi => CommandCode::LockAfi,
            Self::WriteDsfid { .. } => CommandCode::WriteDsfid,
            Self::LockDsfid => CommandCode::LockDsfid,
        }
    }

    /// Encode the full addressed frame for `uid`.
    pub fn encode(&self, uid: &Uid) -> Vec<u8> {
        match self {
            Self::SystemInfo => encode_system_info(uid),
            Self::ReadBlock { index } => encode_read_block(uid, *index),
            Self::ReadBlocks { first, count } => encode_read_blocks(uid, *first, *count),
            Self::WriteBlock { index, data } => encode_write_block(uid, *index, data),
            Self::WriteBlocks { first, count, data } => {
                encode_write_blocks(uid, *first, *count, data)
            }
            Self::WriteAfi { afi } => encode_write_afi(uid, *afi),
            Self::LockAfi => encode_lock_afi(uid),
            Self::WriteDsfid { dsfid } => encode_write_dsfid(uid, *dsfid),
            Self::LockDsfid => encode_lock_dsfid(uid),
        }
    }
}
