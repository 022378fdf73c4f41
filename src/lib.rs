//! Courier - HTTP request proxy and recorder
//!
//! Backend for an API-testing client: accepts a description of an arbitrary
//! outbound HTTP request, executes it against the remote origin, returns the
//! normalized response, and records the exchange for later retrieval.
//!
//! ## Features
//!
//! - Body-encoding dispatch (raw, form-data, urlencoded) with Content-Type
//!   defaulting
//! - Bounded execution time with a single unified outcome shape for
//!   responses and transport failures
//! - Exchange history with newest-first listing, lookup, and deletion
//! - PostgreSQL persistence

pub mod api;
pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
#[cfg(test)]
pub mod testutil;

pub use config::Config;
pub use database::Database;
pub use error::{CourierError, Result};
