//! Database connection management and the SQLite content store.

mod connections;
pub mod entity;
pub mod seed;
pub mod sqlite_store;

pub use connections::{DatabaseConfig, connect};
pub use sqlite_store::SqliteContentStore;
