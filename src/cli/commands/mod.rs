pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod record;
pub mod reset;
