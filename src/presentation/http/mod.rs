//! HTTP API
//!
//! Route table and request handlers.

pub mod extractors;
pub mod handlers;
pub mod routes;
