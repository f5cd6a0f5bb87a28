//! Task request validation.
//!
//! Rules live in [`rules`] as pure functions; [`service`] combines them into
//! the default [`TaskRequestValidator`](crate::task::ports::TaskRequestValidator).

pub mod rules;
pub mod service;

pub use service::DefaultTaskValidator;
