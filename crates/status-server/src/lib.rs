//! Status server library - HTTP status and health endpoints for the DevOps
//! pipeline demo.
//!
//! This library provides the HTTP routes, configuration, and logging setup
//! for the status server. It's separated from main.rs to enable integration testing.

pub mod config;
pub mod logging;
pub mod routes;
