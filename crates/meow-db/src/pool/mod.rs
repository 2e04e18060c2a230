//! Connection pool management

mod sqlite;

pub use sqlite::{create_pool, create_pool_from_env, init_schema, SqlitePool, SqlitePoolConfig};
