//! Credential store: the `UserStore` seam plus Postgres and in-process backends.

mod memory;
mod pool;
mod repositories;

pub use memory::MemoryUserStore;
pub use pool::{create_pool, ensure_schema, DbPool};
pub use repositories::*;
