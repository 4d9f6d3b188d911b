//! Shared data types for the laterlist store.

pub mod errors;
pub mod settings;
pub mod video;
