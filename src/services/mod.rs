// Service exports
pub mod postgres;

pub use postgres::{PostgresDirectory, PostgresError};
