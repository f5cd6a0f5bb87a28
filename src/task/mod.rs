//! Task management.
//!
//! Tasks are created from validated requests, revised in place, removed by
//! identifier, and listed with an optional status filter and a single sort
//! key (status rank or deadline). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Request validation in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
