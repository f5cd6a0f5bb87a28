//! Adapter implementations for task ports.
//!
//! - [`memory`]: in-process repository for tests and storage-less runs
//! - [`postgres`]: Diesel-backed `PostgreSQL` repository
//! - [`http`]: axum transport exposing the task service over REST

pub mod http;
pub mod memory;
pub mod postgres;
