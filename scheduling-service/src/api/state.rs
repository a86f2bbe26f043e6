use std::sync::Arc;

use crate::domain::repositories::SchedulingRepositoryFactory;

#[derive(Clone)]
pub struct AppState {
    pub repo_factory: Arc<dyn SchedulingRepositoryFactory>,
}

impl AppState {
    pub fn new(repo_factory: Arc<dyn SchedulingRepositoryFactory>) -> Self {
        Self { repo_factory }
    }
}
