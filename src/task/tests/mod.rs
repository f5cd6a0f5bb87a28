//! Unit tests for task management.

mod query_tests;
mod support;
