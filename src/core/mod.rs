pub mod config;
pub mod export;
pub mod log;
pub mod punch;
pub mod report;
pub mod worktypes;
