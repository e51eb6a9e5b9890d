// vicinity-rs/vicinity/src/tag/operations/read.rs

use crate::protocol::commands::Command;
use crate::protocol::responses::{
    batch_read_window, decode_system_info, single_block_data, SystemInfoResponse,
};
use crate::tag::{Ready, Tag, TagState};
use crate::Result;

/// One system-information exchange, decoded. Works in any session state;
/// `initialize()` and the `Ready` diagnostics path share it.
pub(crate) fn query_system_info<S: TagState>(tag: &mut Tag<S>) -> Result<SystemInfoResponse> {
    let uid_len = tag.uid().len();
    let response = tag.execute(&Command::SystemInfo)?;
    decode_system_info(&response, uid_len)
}

/// Read one block; `Ok(None)` on a tag error status.
pub fn read_block(tag: &mut Tag<Ready>, index: u8) -> Result<Option<Vec<u8>>> {
    let response = tag.execute(&Command::ReadBlock { index })?;
    single_block_data(&response)
}

/// Read the whole data area in one exchange, returning the compatibility
/// window described at [`batch_read_window`].
pub fn read_all_blocks(tag: &mut Tag<Ready>) -> Result<Option<Vec<u8>>> {
    let count = tag.info().block_count();
    let size = tag.info().block_size();
    // A 256-block tag wraps the count byte to zero.
    let response = tag.execute(&Command::ReadBlocks {
        first: 0,
        count: count as u8,
    })?;
    batch_read_window(&response, size, count)
}

/// Whole data area as text, decoded lossily as UTF-8.
pub fn read_all(tag: &mut Tag<Ready>) -> Result<Option<String>> {
    let bytes = read_all_blocks(tag)?;
    Ok(bytes.map(|b| String::from_utf8_lossy(&b).into_owned()))
}
