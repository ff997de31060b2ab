pub mod connection;
pub mod queries;
pub mod schema;

pub use connection::Database;
pub use schema::{Schema, TABLE_NAME};
