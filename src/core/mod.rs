pub mod export;
pub mod log;
pub mod record;
pub mod reset;
