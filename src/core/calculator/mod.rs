pub mod breaks;
pub mod summary;
