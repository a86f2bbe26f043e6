mod postgres_scheduling_repository;

pub use postgres_scheduling_repository::{
    PostgresSchedulingRepository, PostgresSchedulingRepositoryFactory,
};
