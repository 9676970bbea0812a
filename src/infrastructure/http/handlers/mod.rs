//! HTTP Handlers

mod health;
mod records;
mod resource;

pub use health::health;
pub use records::{create_record, delete_record, get_record, list_records};
pub use resource::get_resource;
