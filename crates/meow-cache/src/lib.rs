//! # meow-cache
//!
//! Write-back message cache and filtered reader over per-channel JSON files.
//!
//! ## Features
//!
//! - **Write-Back Cache**: per-channel in-memory buffers with a debounced
//!   flush timer; records are merged into the persisted file with
//!   last-writer-wins deduplication by message id
//! - **Reaction Aggregation**: in-buffer increments for the three tracked
//!   reaction kinds while a message sits in its buffering window
//! - **Filtered Reader**: loads every persisted channel file for a guild and
//!   applies reaction/author predicates
//!
//! ## Example
//!
//! ```ignore
//! use meow_cache::{read_server_channels, WriteBackCache, WriteBackConfig};
//! use meow_core::FilterKind;
//!
//! let cache = WriteBackCache::new(WriteBackConfig::default());
//!
//! // Event handlers feed the cache; a flush runs once per channel per window
//! cache.buffer_message(&message);
//! cache.buffer_reaction(&message, "🔥");
//!
//! // Later, independent of the in-memory state:
//! let spicy = read_server_channels(cache.layout(), "cat cafe", FilterKind::Fire, None).await?;
//! ```

pub mod error;
pub mod layout;
pub mod reader;
pub mod writeback;

// Re-export commonly used types
pub use error::{CacheError, CacheResult};
pub use layout::CacheLayout;
pub use reader::read_server_channels;
pub use writeback::{WriteBackCache, WriteBackConfig};
