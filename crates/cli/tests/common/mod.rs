//! In-memory catalog shared by the view and browser tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use heroes_core::hero::{Biography, Hero, HeroId, HeroImages, HeroPage, PaginationParams};
use heroes_core::ports::{HeroRepository, RepositoryError};
use heroes_core::service::HeroService;

pub struct FakeCatalog {
    heroes: Vec<Hero>,
    failing: AtomicBool,
    pub list_calls: Mutex<Vec<PaginationParams>>,
    pub hero_calls: Mutex<Vec<HeroId>>,
}

impl FakeCatalog {
    /// Catalog of heroes with ids `1..=count`.
    pub fn with_heroes(count: i64) -> Arc<Self> {
        Arc::new(Self {
            heroes: (1..=count).map(hero).collect(),
            failing: AtomicBool::new(false),
            list_calls: Mutex::new(Vec::new()),
            hero_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn last_list_call(&self) -> Option<PaginationParams> {
        self.list_calls.lock().unwrap().last().copied()
    }

    pub fn service(self: &Arc<Self>) -> HeroService {
        HeroService::new(self.clone())
    }

    fn check_failing(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable {
                message: "Service temporarily unavailable. Please try again later.".into(),
                status: Some(503),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HeroRepository for FakeCatalog {
    async fn get_heroes(&self, params: PaginationParams) -> Result<HeroPage, RepositoryError> {
        self.list_calls.lock().unwrap().push(params);
        self.check_failing()?;

        let page = u64::from(params.page.unwrap_or(1));
        let size = u64::from(params.size.unwrap_or(20));
        let length = self.heroes.len() as u64;
        let last_page = length.div_ceil(size).max(1);
        let start = ((page - 1) * size).min(length);
        let end = (page * size).min(length);

        Ok(HeroPage {
            length,
            size,
            page,
            first_page: 1,
            last_page,
            start_index: start,
            end_index: end.saturating_sub(1),
            items: self.heroes[start as usize..end as usize].to_vec(),
        })
    }

    async fn get_hero_by_id(&self, id: HeroId) -> Result<Hero, RepositoryError> {
        self.hero_calls.lock().unwrap().push(id);
        self.check_failing()?;
        self.heroes
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or(RepositoryError::Unavailable {
                message: "Resource not found.".into(),
                status: Some(404),
            })
    }
}

pub fn hero(id: i64) -> Hero {
    Hero {
        id,
        name: format!("Hero {id}"),
        slug: format!("{id}-hero-{id}"),
        powerstats: None,
        appearance: None,
        biography: Some(Biography {
            full_name: Some(format!("Civilian {id}")),
            publisher: Some("Marvel Comics".into()),
            ..Default::default()
        }),
        work: None,
        connections: None,
        images: HeroImages {
            xs: format!("xs/{id}.jpg"),
            sm: format!("sm/{id}.jpg"),
            md: format!("md/{id}.jpg"),
            lg: format!("lg/{id}.jpg"),
        },
    }
}
