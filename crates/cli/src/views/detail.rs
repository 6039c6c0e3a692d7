//! Single hero detail screen.

use std::fmt::Write;

use heroes_core::display::{
    aliases, detail_image, display_name, height, publisher, stat_tier, stat_value, weight,
    StatTier,
};
use heroes_core::hero::{Hero, HeroId};
use heroes_core::service::HeroService;

use crate::state::ViewState;
use crate::views::widgets::{detail_skeleton, error_panel};

/// Shown when the hero fails to load, whatever the cause.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load hero details. Please try again.";

/// Shown when the requested id is not a number.
pub const INVALID_ID_MESSAGE: &str = "Invalid hero id";

/// Width of a power stat bar in cells (10 points per cell).
const STAT_BAR_WIDTH: i64 = 10;

pub struct HeroDetailView {
    service: HeroService,
    hero_id: Option<HeroId>,
    state: ViewState<Hero>,
}

impl HeroDetailView {
    pub fn new(service: HeroService) -> Self {
        Self {
            service,
            hero_id: None,
            state: ViewState::Loading,
        }
    }

    pub fn hero_id(&self) -> Option<HeroId> {
        self.hero_id
    }

    pub fn state(&self) -> &ViewState<Hero> {
        &self.state
    }

    /// Parse `raw_id` and load that hero, or fail without a request.
    pub async fn open(&mut self, raw_id: &str) {
        match raw_id.trim().parse::<HeroId>() {
            Ok(id) => {
                self.hero_id = Some(id);
                self.load().await;
            }
            Err(_) => {
                self.hero_id = None;
                self.state = ViewState::Failed(INVALID_ID_MESSAGE.to_string());
            }
        }
    }

    pub fn begin_load(&mut self) {
        self.state = ViewState::Loading;
    }

    pub async fn finish_load(&mut self) {
        let Some(id) = self.hero_id else {
            self.state = ViewState::Failed(INVALID_ID_MESSAGE.to_string());
            return;
        };
        self.state = match self.service.get_hero_by_id(id).await {
            Ok(hero) => ViewState::Ready(hero),
            Err(e) => {
                tracing::error!(error = %e, id, "Error loading hero");
                ViewState::Failed(DETAIL_ERROR_MESSAGE.to_string())
            }
        };
    }

    pub async fn load(&mut self) {
        self.begin_load();
        self.finish_load().await;
    }

    /// Reload the last requested hero. No-op without a valid id.
    pub async fn retry(&mut self) {
        if self.hero_id.is_some() {
            self.load().await;
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => detail_skeleton(),
            ViewState::Failed(message) => {
                let action = if self.hero_id.is_some() {
                    "Press r to retry or b to go back."
                } else {
                    "Press b to go back."
                };
                error_panel(message, action)
            }
            ViewState::Ready(hero) => render_hero(hero),
        }
    }
}

/// Full text rendering of a hero.
pub fn render_hero(hero: &Hero) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", hero.name, hero.id);
    let _ = writeln!(out, "{} | {}", display_name(hero), publisher(hero));
    let _ = writeln!(out, "{}", detail_image(hero));

    if let Some(stats) = &hero.powerstats {
        section(&mut out, "Power stats");
        for (name, stat) in stats.entries() {
            let _ = writeln!(
                out,
                "  {name:<13} {} {:>3}  {}",
                stat_bar(stat),
                stat_value(stat),
                tier_label(stat_tier(stat)),
            );
        }
    }

    if let Some(appearance) = &hero.appearance {
        section(&mut out, "Appearance");
        field(&mut out, "Gender", appearance.gender.as_deref());
        field(&mut out, "Race", appearance.race.as_deref());
        field(&mut out, "Height", Some(&height(hero)));
        field(&mut out, "Weight", Some(&weight(hero)));
        field(&mut out, "Eye color", appearance.eye_color.as_deref());
        field(&mut out, "Hair color", appearance.hair_color.as_deref());
    }

    if let Some(biography) = &hero.biography {
        section(&mut out, "Biography");
        field(&mut out, "Full name", biography.full_name.as_deref());
        field(&mut out, "Alter egos", biography.alter_egos.as_deref());
        field(&mut out, "Aliases", Some(&aliases(hero)));
        field(&mut out, "Place of birth", biography.place_of_birth.as_deref());
        field(&mut out, "First appearance", biography.first_appearance.as_deref());
        field(&mut out, "Publisher", biography.publisher.as_deref());
        field(&mut out, "Alignment", biography.alignment.as_deref());
    }

    if let Some(work) = &hero.work {
        section(&mut out, "Work");
        field(&mut out, "Occupation", work.occupation.as_deref());
        field(&mut out, "Base", work.base.as_deref());
    }

    if let Some(connections) = &hero.connections {
        section(&mut out, "Connections");
        field(&mut out, "Group affiliation", connections.group_affiliation.as_deref());
        field(&mut out, "Relatives", connections.relatives.as_deref());
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
}

/// Write `label: value`, skipping missing and empty values.
fn field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        let _ = writeln!(out, "  {label}: {value}");
    }
}

fn stat_bar(stat: Option<i64>) -> String {
    let filled = (stat_value(stat).clamp(0, 100) * STAT_BAR_WIDTH / 100) as usize;
    let empty = STAT_BAR_WIDTH as usize - filled;
    format!("{}{}", "█".repeat(filled), "·".repeat(empty))
}

fn tier_label(tier: StatTier) -> &'static str {
    match tier {
        StatTier::High => "high",
        StatTier::Medium => "medium",
        StatTier::Low => "low",
    }
}
