pub mod initialize;
pub mod kv;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;

pub use kv::{KvStore, MemoryKv, SqliteKv};
pub use store::{EntryStore, STORAGE_KEY};
