// vicinity-rs/vicinity/src/tag/operations/config.rs
//
// AFI / DSFID register operations. All four are pass-through: no local
// guard against double-locking, the tag's answer is the answer.

use crate::protocol::commands::Command;
use crate::protocol::responses::{is_success, response_status};
use crate::tag::{Ready, Tag};
use crate::Result;

fn accepted(response: &[u8]) -> Result<bool> {
    Ok(is_success(response_status(response)?))
}

/// Set the Application Family Identifier.
pub fn write_afi(tag: &mut Tag<Ready>, afi: u8) -> Result<bool> {
    let response = tag.execute(&Command::WriteAfi { afi })?;
    accepted(&response)
}

/// Lock the AFI register for good.
pub fn lock_afi(tag: &mut Tag<Ready>) -> Result<bool> {
    let response = tag.execute(&Command::LockAfi)?;
    accepted(&response)
}

/// Set the Data Storage Format Identifier.
pub fn write_dsfid(tag: &mut Tag<Ready>, dsfid: u8) -> Result<bool> {
    let response = tag.execute(&Command::WriteDsfid { dsfid })?;
    accepted(&response)
}

/// Lock the DSFID register for good.
pub fn lock_dsfid(tag: &mut Tag<Ready>) -> Result<bool> {
    let response = tag.execute(&Command::LockDsfid)?;
    accepted(&response)
}
