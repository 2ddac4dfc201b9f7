//! Common test utilities and helper modules
//!
//! Mock readers that misbehave in controlled ways, plus an environment guard
//! for tests that touch process-wide variables.

#![allow(dead_code)]

pub mod env_guard;
pub mod mock_streams;
