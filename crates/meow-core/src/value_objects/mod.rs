//! Value objects - immutable domain primitives

mod snowflake;

pub use snowflake::{Snowflake, SnowflakeParseError};
