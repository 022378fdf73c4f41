//! API server implementation
//!
//! Provides the REST endpoints for executing requests and browsing the
//! exchange history.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use server::ApiServer;
