// vicinity-rs/vicinity/src/prelude.rs

pub use crate::protocol::{Command, CommandCode, FrameBuilder};
pub use crate::tag::{Ready, Tag, TagInfo, TagState, Uninitialized};
pub use crate::transport::Transceiver;
pub use crate::{Error, Result, Uid};

// Re-export the hex helpers for convenience
pub use crate::utils::{bytes_to_hex_spaced, bytes_to_hex_upper};
