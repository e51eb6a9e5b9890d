// vicinity-rs/vicinity/src/tag/operations/mod.rs

//! Free-function operation bodies behind the [`Tag`] methods.
//!
//! [`Tag`]: crate::tag::Tag

pub mod config;
pub mod read;
pub mod write;
