// vicinity-rs/vicinity/src/protocol/commands/write.rs

use crate::protocol::commands::CommandCode;
use crate::protocol::frame::FrameBuilder;
use crate::types::Uid;

/// Encode Write Single Block: index byte, then exactly one block of data.
///
/// Length validation happens at the session layer; the encoder copies
/// whatever it is handed.
pub fn encode_write_block(uid: &Uid, index: u8, data: &[u8]) -> Vec<u8> {
    FrameBuilder::new(CommandCode::WriteSingleBlock, uid)
        .block_index(index)
        .data(data)
        .build()
}

/// Encode Write Multiple Blocks: first block, count, then the concatenated
/// block data. Same full-count convention as the batch read.
pub fn encode_write_blocks(uid: &Uid, first: u8, count: u8, data: &[u8]) -> Vec<u8> {
    FrameBuilder::new(CommandCode::WriteMultipleBlocks, uid)
        .block_index(first)
        .block_count(count)
        .data(data)
        .build()
}
