// vicinity-rs/vicinity/src/protocol/responses/mod.rs

pub mod info;
pub mod read;
pub mod status;

pub use info::{decode_system_info, SystemInfoResponse};
pub use read::{batch_read_window, single_block_data};
pub use status::{error_name, is_success, response_status};
