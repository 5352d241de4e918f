pub mod batch;
pub mod connection;
pub mod contacts;
pub mod db_error;
pub mod listings;
pub mod seed;

pub use connection::{init_db, Database};
pub use db_error::DbError;
