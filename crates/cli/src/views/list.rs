//! Paginated hero list.

use std::fmt::Write;

use heroes_core::display::{card_image, display_name, publisher};
use heroes_core::hero::{Hero, HeroPage, PaginationParams};
use heroes_core::pagination::Paginator;
use heroes_core::service::HeroService;

use crate::state::ViewState;
use crate::views::widgets::{error_panel, list_skeleton, pagination_bar, pagination_footer};

/// Shown when a page fails to load, whatever the cause.
pub const LIST_ERROR_MESSAGE: &str = "Failed to load heroes. Please try again.";

/// List screen state: which page is requested and what came back.
pub struct HeroListView {
    service: HeroService,
    current_page: u32,
    page_size: u32,
    state: ViewState<HeroPage>,
}

impl HeroListView {
    /// Starts on page 1 in the loading state, so the first render shows
    /// skeletons.
    pub fn new(service: HeroService, page_size: u32) -> Self {
        Self {
            service,
            current_page: 1,
            page_size,
            state: ViewState::Loading,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self) -> &ViewState<HeroPage> {
        &self.state
    }

    pub fn heroes(&self) -> &[Hero] {
        self.state.data().map(|p| p.items.as_slice()).unwrap_or_default()
    }

    /// `lastPage` of the loaded page, or 1.
    pub fn total_pages(&self) -> u32 {
        self.state
            .data()
            .and_then(|p| u32::try_from(p.last_page).ok())
            .filter(|p| *p > 0)
            .unwrap_or(1)
    }

    /// `length` of the loaded page, or 0.
    pub fn total_items(&self) -> u64 {
        self.state.data().map(|p| p.length).unwrap_or(0)
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(
            self.current_page,
            self.total_pages(),
            self.page_size,
            self.total_items(),
        )
    }

    /// Enter the loading state without fetching yet.
    pub fn begin_load(&mut self) {
        self.state = ViewState::Loading;
    }

    /// Fetch the current page and settle the state.
    pub async fn finish_load(&mut self) {
        let params = PaginationParams::new(self.current_page, self.page_size);
        self.state = match self.service.get_heroes(params).await {
            Ok(page) => ViewState::Ready(page),
            Err(e) => {
                tracing::error!(error = %e, page = self.current_page, "Error loading heroes");
                ViewState::Failed(LIST_ERROR_MESSAGE.to_string())
            }
        };
    }

    pub async fn load(&mut self) {
        self.begin_load();
        self.finish_load().await;
    }

    /// Switch to `page` and reload.
    pub async fn change_page(&mut self, page: u32) {
        self.current_page = page;
        self.load().await;
    }

    /// Switch page size, return to page 1 and reload.
    pub async fn change_page_size(&mut self, size: u32) {
        self.page_size = size;
        self.current_page = 1;
        self.load().await;
    }

    pub async fn retry(&mut self) {
        self.load().await;
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Superheroes");
        let _ = writeln!(out, "===========");
        let _ = writeln!(out);

        match &self.state {
            ViewState::Loading => out.push_str(&list_skeleton(self.page_size)),
            ViewState::Failed(message) => {
                out.push_str(&error_panel(message, "Press r to retry."));
                return out;
            }
            ViewState::Ready(page) if page.items.is_empty() => {
                let _ = writeln!(out, "  No heroes found.");
            }
            ViewState::Ready(page) => {
                for hero in &page.items {
                    out.push_str(&hero_card(hero));
                }
            }
        }

        let paginator = self.paginator();
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", pagination_bar(&paginator));
        let _ = writeln!(out, "  {}", pagination_footer(&paginator));
        out
    }
}

/// One list row: id, name, civilian name, publisher and portrait.
pub fn hero_card(hero: &Hero) -> String {
    format!(
        "  {:>4}  {:<24}  {:<28}  {}\n        {}\n",
        hero.id,
        hero.name,
        display_name(hero),
        publisher(hero),
        card_image(hero),
    )
}
