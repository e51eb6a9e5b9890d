// vicinity-rs/vicinity/src/lib.rs

//! vicinity
//!
//! Pure Rust ISO 15693 (NFC-V) vicinity tag reader/writer core.
//!
//! The crate frames addressed commands, discovers tag geometry, and moves
//! block data over any raw byte transceiver the host supplies behind the
//! [`transport::Transceiver`] trait. Sessions are type-state handles:
//! [`tag::Tag`] starts `Uninitialized`, and one `initialize()` exchange
//! yields the `Ready` session that carries the tag's geometry.
//!
//! ```
//! use vicinity::prelude::*;
//! use vicinity::transport::EmulatedVicinityTag;
//!
//! # fn main() -> vicinity::Result<()> {
//! let uid = [0xE0, 0x04, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
//! let emulated = EmulatedVicinityTag::new(&uid, 28, 4);
//!
//! let session = Tag::with_wire_uid(Uid::from_wire(uid.to_vec())?, Box::new(emulated));
//! let mut tag = session.initialize()?;
//!
//! assert_eq!(tag.info().block_count(), 28);
//! assert_eq!(tag.info().block_size(), 4);
//!
//! tag.write_string("hi")?;
//! assert_eq!(tag.read_block(0)?.as_deref(), Some(&b"hi\0\0"[..]));
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export the error and identifier types at the crate root so
// `crate::Error`, `crate::Result` and `crate::Uid` are available to
// consumers and to the `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
