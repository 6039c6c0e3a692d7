//! Repository port for the hero catalog.
//!
//! The application layer depends only on [`HeroRepository`]; the HTTP
//! adapter in `heroes-client` is the production implementation.

use async_trait::async_trait;

use crate::error::ValidationError;
use crate::hero::{Hero, HeroId, HeroPage, PaginationParams};

/// Failure reported through the port, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The payload arrived but its envelope is malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend could not be reached or answered with an error.
    ///
    /// `message` is already phrased for end users.
    #[error("{message}")]
    Unavailable {
        message: String,
        status: Option<u16>,
    },
}

/// Read access to the hero catalog.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Fetch one page of the listing.
    async fn get_heroes(&self, params: PaginationParams) -> Result<HeroPage, RepositoryError>;

    /// Fetch the full record of a single hero.
    async fn get_hero_by_id(&self, id: HeroId) -> Result<Hero, RepositoryError>;
}
