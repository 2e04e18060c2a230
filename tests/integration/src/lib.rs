//! Integration test utilities for the meow storage subsystem
//!
//! This crate provides helpers for exercising the write-back cache, the
//! filtered reader, and the meow store together against real temp
//! directories and in-memory SQLite pools.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
