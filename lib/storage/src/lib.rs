pub mod json_store;
pub mod manager;

pub use json_store::{Document, JsonStore};
pub use manager::StorageManager;
