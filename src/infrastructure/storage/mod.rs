//! Storage infrastructure - Database gateway and backend selection

mod factory;
mod postgres;
mod statement;

pub use factory::{StorageFactory, StorageType};
pub use postgres::{Database, PostgresConfig};
pub use statement::{SqlParam, Statement};
