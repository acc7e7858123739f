pub mod log;
pub mod schema;
pub mod store;

pub use store::{EventStore, with_store};
