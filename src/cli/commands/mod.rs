pub mod addtype;
pub mod config;
pub mod export;
pub mod init;
pub mod listtypes;
pub mod log;
pub mod report;
pub mod start;
pub mod stop;
