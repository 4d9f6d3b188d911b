//! laterlist — an expiring watch-later video store.
//!
//! Saved records auto-expire after a configurable period. The store owns the
//! persisted collection, the lifecycle policy derives display state from
//! timestamps, and the coordination layer bridges page-context requesters to
//! the store over asynchronous message passing.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod coordinator;
pub mod database;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
