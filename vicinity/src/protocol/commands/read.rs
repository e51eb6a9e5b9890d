// vicinity-rs/vicinity/src/protocol/commands/read.rs

use crate::protocol::commands::CommandCode;
use crate::protocol::frame::FrameBuilder;
use crate::types::Uid;

/// Encode Read Single Block for `index`.
pub fn encode_read_block(uid: &Uid, index: u8) -> Vec<u8> {
    FrameBuilder::new(CommandCode::ReadSingleBlock, uid)
        .block_index(index)
        .build()
}

/// Encode Read Multiple Blocks for `count` blocks starting at `first`.
///
/// The count byte carries the full block count, not the ISO count-minus-one
/// convention; readers in the field expect it that way and a 256-block
/// request wraps to zero.
pub fn encode_read_blocks(uid: &Uid, first: u8, count: u8) -> Vec<u8> {
    FrameBuilder::new(CommandCode::ReadMultipleBlocks, uid)
        .block_index(first)
        .block_count(count)
        .build()
}
