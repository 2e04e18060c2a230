//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in meow-core.

mod error;
mod meow;

pub use meow::SqliteMeowRepository;
