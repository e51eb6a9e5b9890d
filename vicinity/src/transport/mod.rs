// vicinity-rs/vicinity/src/transport/mod.rs

pub mod emulator;
pub mod mock;
pub mod traits;

pub use emulator::EmulatedVicinityTag;
pub use mock::MockTransceiver;
pub use traits::Transceiver;
