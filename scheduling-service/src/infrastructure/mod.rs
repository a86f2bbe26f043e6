pub mod config;
pub mod database;
pub mod repositories;

pub use repositories::{PostgresSchedulingRepository, PostgresSchedulingRepositoryFactory};
