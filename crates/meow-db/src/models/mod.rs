//! Database models - SQLx-compatible structs for SQLite tables

mod meow;

pub use meow::LeaderboardModel;
