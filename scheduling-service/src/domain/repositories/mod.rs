mod scheduling_repository;

pub use scheduling_repository::{SchedulingRepository, SchedulingRepositoryFactory};
