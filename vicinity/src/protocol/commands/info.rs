// vicinity-rs/vicinity/src/protocol/commands/info.rs

use crate::protocol::commands::CommandCode;
use crate::protocol::frame::FrameBuilder;
use crate::types::Uid;

/// Encode Get System Information. No payload beyond the addressed header.
pub fn encode_system_info(uid: &Uid) -> Vec<u8> {
    FrameBuilder::new(CommandCode::SystemInfo, uid).build()
}
