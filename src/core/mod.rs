pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod history;
pub mod log;
pub mod logic;
pub mod session;
