//! # meow-db
//!
//! Database layer implementing the meow counter store with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides the SQLite implementation for the `MeowRepository`
//! trait defined in `meow-core`. It handles:
//!
//! - Connection pool management and idempotent schema creation
//! - Database models with SQLx `FromRow` derives
//! - The repository implementation
//! - The lossy `MeowStore` facade (fire-and-forget recording, empty-list
//!   fallback on query failure)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meow_db::{create_pool, MeowStore, SqlitePoolConfig};
//! use meow_core::MeowEvent;
//!
//! async fn example() -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&SqlitePoolConfig::from_env()).await?;
//!     let store = MeowStore::new(pool);
//!
//!     store.record_event(&MeowEvent::new("200", "cat cafe")).await;
//!     let board = store.leaderboard("cat cafe").await;
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;
pub mod store;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, init_schema, SqlitePool, SqlitePoolConfig};
pub use repositories::SqliteMeowRepository;
pub use store::MeowStore;
