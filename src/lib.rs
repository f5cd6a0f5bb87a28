//! Tasklist: a task-management backend.
//!
//! This crate creates, revises, removes, and lists task records, validating
//! titles and deadlines on the way in and filtering or ordering them on the
//! way out.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, memory)
//!
//! # Modules
//!
//! - [`task`]: Task model, validation, storage ports, and service
//! - [`config`]: Environment-driven server settings

pub mod config;
pub mod task;
