//! # AniPulse Infrastructure
//!
//! Concrete implementations of the ports defined in `anipulse-core`:
//! the SQLite-backed content store, connection management, and the
//! one-time demonstration seed.

pub mod database;

pub use database::{DatabaseConfig, SqliteContentStore};
