// vicinity-rs/vicinity/src/tag/operations/write.rs

use log::{debug, warn};

use crate::protocol::commands::Command;
use crate::protocol::responses::{error_name, is_success, response_status};
use crate::tag::{Ready, Tag};
use crate::{Error, Result};

/// One single-block write exchange, returning the raw status byte.
fn write_block_status(tag: &mut Tag<Ready>, index: u8, data: &[u8]) -> Result<u8> {
    let response = tag.execute(&Command::WriteBlock {
        index,
        data: data.to_vec(),
    })?;
    response_status(&response)
}

/// Write one block. The length check runs before anything goes over the
/// air; a wrong-sized buffer never reaches the tag.
pub fn write_block(tag: &mut Tag<Ready>, index: u8, data: &[u8]) -> Result<bool> {
    let expected = tag.info().block_size();
    if data.len() != expected {
        return Err(Error::BlockLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(is_success(write_block_status(tag, index, data)?))
}

/// Zero every block from 0 upward. Rejections are logged and skipped;
/// transport failures abort the loop.
pub fn clear_all_blocks(tag: &mut Tag<Ready>) -> Result<bool> {
    let zeros = vec![0u8; tag.info().block_size()];
    for index in 0..tag.info().block_count() {
        let status = write_block_status(tag, index as u8, &zeros)?;
        if !is_success(status) {
            warn!(
                "tag {} rejected clear of block {}: {} ({:#04x})",
                tag.uid_hex(),
                index,
                error_name(status),
                status
            );
        }
    }
    Ok(true)
}

/// Zero every block, aborting at the first rejection.
pub fn clear_all_blocks_strict(tag: &mut Tag<Ready>) -> Result<()> {
    let zeros = vec![0u8; tag.info().block_size()];
    for index in 0..tag.info().block_count() {
        let status = write_block_status(tag, index as u8, &zeros)?;
        if !is_success(status) {
            return Err(Error::BlockRejected {
                index: index as u8,
                status,
            });
        }
    }
    Ok(())
}

/// Zero-padded buffer covering the blocks `bytes` needs, clamped to the
/// tag's capacity. Text past the clamp is dropped.
fn layout_text(bytes: &[u8], block_size: usize, block_count: usize) -> Vec<u8> {
    let blocks_needed = bytes.len().div_ceil(block_size).min(block_count);
    let mut padded = vec![0u8; blocks_needed * block_size];
    let take = bytes.len().min(padded.len());
    padded[..take].copy_from_slice(&bytes[..take]);
    padded
}

/// Clear the tag, then write `text` across blocks from index 0.
/// Rejections are logged and skipped; the call reports `true` once the
/// loop completes.
pub fn write_string(tag: &mut Tag<Ready>, text: &str) -> Result<bool> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Ok(true);
    }

    clear_all_blocks(tag)?;

    let size = tag.info().block_size();
    let padded = layout_text(bytes, size, tag.info().block_count());
    for (index, chunk) in padded.chunks(size).enumerate() {
        let status = write_block_status(tag, index as u8, chunk)?;
        if !is_success(status) {
            warn!(
                "tag {} rejected write of block {}: {} ({:#04x})",
                tag.uid_hex(),
                index,
                error_name(status),
                status
            );
        }
    }
    Ok(true)
}

/// Like [`write_string`] but strict end to end: the clear and every block
/// write must be accepted.
pub fn write_string_strict(tag: &mut Tag<Ready>, text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Ok(());
    }

    clear_all_blocks_strict(tag)?;

    let size = tag.info().block_size();
    let padded = layout_text(bytes, size, tag.info().block_count());
    for (index, chunk) in padded.chunks(size).enumerate() {
        let status = write_block_status(tag, index as u8, chunk)?;
        if !is_success(status) {
            return Err(Error::BlockRejected {
                index: index as u8,
                status,
            });
        }
    }
    Ok(())
}

/// Write `text` in one Write Multiple Blocks exchange, without clearing
/// first. Many real tags answer this with "not supported", so a `false`
/// here usually means fall back to [`write_string`].
pub fn write_string_batch(tag: &mut Tag<Ready>, text: &str) -> Result<bool> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Ok(true);
    }

    let size = tag.info().block_size();
    let padded = layout_text(bytes, size, tag.info().block_count());
    let count = (padded.len() / size) as u8;
    let response = tag.execute(&Command::WriteBlocks {
        first: 0,
        count,
        data: padded,
    })?;

    let status = response_status(&response)?;
    if !is_success(status) {
        debug!(
            "tag {} rejected batch write: {} ({:#04x})",
            tag.uid_hex(),
            error_name(status),
            status
        );
    }
    Ok(is_success(status))
}
