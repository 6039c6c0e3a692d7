//! Application service for browsing heroes.

use std::sync::Arc;

use crate::hero::{Hero, HeroId, HeroPage, PaginationParams};
use crate::ports::{HeroRepository, RepositoryError};

/// Use-case entry point for the list and detail views.
///
/// Holds the repository behind the port so views never see the adapter.
#[derive(Clone)]
pub struct HeroService {
    repository: Arc<dyn HeroRepository>,
}

impl HeroService {
    pub fn new(repository: Arc<dyn HeroRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_heroes(&self, params: PaginationParams) -> Result<HeroPage, RepositoryError> {
        self.repository.get_heroes(params).await
    }

    pub async fn get_hero_by_id(&self, id: HeroId) -> Result<Hero, RepositoryError> {
        self.repository.get_hero_by_id(id).await
    }
}
