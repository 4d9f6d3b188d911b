//! laterlist database layer.
//!
//! Provides SQLite connection management, schema migrations, and whole-value
//! access to the two named persistence slots (`savedVideos`, `userSettings`).
//!
//! # Usage
//!
//! ```no_run
//! use laterlist::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("laterlist.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;
pub mod slots;

pub use connection::Database;
