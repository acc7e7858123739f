pub mod action;
pub mod record;
