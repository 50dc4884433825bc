pub mod events;
pub mod schema;
