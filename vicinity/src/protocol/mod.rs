// vicinity-rs/vicinity/src/protocol/mod.rs

//! Wire-level protocol: addressed command frames out, status-led responses
//! back.
//!
//! Everything in this module is pure byte manipulation. Nothing here talks
//! to a transceiver or holds session state, which keeps the codec testable
//! without hardware.

pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::{Command, CommandCode};
pub use frame::FrameBuilder;
pub use responses::{
    batch_read_window, decode_system_info, single_block_data, SystemInfoResponse,
};
