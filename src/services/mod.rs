//! Pure policy and supporting services around the video store.

pub mod extractor;
pub mod lifecycle_policy;
pub mod settings_engine;
