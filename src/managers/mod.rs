//! Store components owning the persisted collections.

pub mod video_store;
