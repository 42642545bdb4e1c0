pub mod break_interval;
pub mod day_summary;
pub mod entry;
pub mod time_field;

pub use break_interval::BreakInterval;
pub use day_summary::DaySummary;
pub use entry::Entry;
pub use time_field::TimeField;
