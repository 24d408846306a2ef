//! Value objects - immutable types that represent domain concepts

mod paging;
mod snowflake;

pub use paging::{Page, PageQuery, SortDirection};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
