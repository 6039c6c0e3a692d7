//! Presentation helpers shared by the list and detail views.
//!
//! Fallback chains for images and labels, and stat bucketing.

use crate::hero::Hero;

/// Bundled portrait used when a hero has no usable image URL.
pub const DEFAULT_HERO_IMAGE: &str = "assets/default-hero.png";

/// Label used when a hero has neither a full name nor a name.
pub const UNNAMED: &str = "Unnamed";

/// Label for missing publisher and physical measurements.
pub const UNKNOWN: &str = "Unknown";

/// Coarse rating of a power stat, for colouring bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTier {
    /// 80 and above.
    High,
    /// 50 to 79.
    Medium,
    /// Below 50 or unknown.
    Low,
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|s| !s.is_empty())
}

/// Medium portrait for list cards: `md`, then `sm`, then the default image.
pub fn card_image(hero: &Hero) -> &str {
    let images = &hero.images;
    first_non_empty(&[images.md.as_str(), images.sm.as_str()]).unwrap_or(DEFAULT_HERO_IMAGE)
}

/// Large portrait for the detail view: `lg`, `md`, `sm`, then the default.
pub fn detail_image(hero: &Hero) -> &str {
    let images = &hero.images;
    first_non_empty(&[images.lg.as_str(), images.md.as_str(), images.sm.as_str()])
        .unwrap_or(DEFAULT_HERO_IMAGE)
}

/// Full civilian name if known, otherwise the hero name.
pub fn display_name(hero: &Hero) -> &str {
    let full_name = hero
        .biography
        .as_ref()
        .and_then(|b| b.full_name.as_deref())
        .unwrap_or_default();
    first_non_empty(&[full_name, hero.name.as_str()]).unwrap_or(UNNAMED)
}

pub fn publisher(hero: &Hero) -> &str {
    hero.biography
        .as_ref()
        .and_then(|b| b.publisher.as_deref())
        .filter(|p| !p.is_empty())
        .unwrap_or(UNKNOWN)
}

/// Stat value with unknown treated as zero.
pub fn stat_value(stat: Option<i64>) -> i64 {
    stat.unwrap_or(0)
}

pub fn stat_tier(stat: Option<i64>) -> StatTier {
    match stat_value(stat) {
        v if v >= 80 => StatTier::High,
        v if v >= 50 => StatTier::Medium,
        _ => StatTier::Low,
    }
}

/// Aliases joined with `", "`, or empty when there are none.
pub fn aliases(hero: &Hero) -> String {
    hero.biography
        .as_ref()
        .map(|b| b.aliases.join(", "))
        .unwrap_or_default()
}

pub fn height(hero: &Hero) -> String {
    measurement(hero.appearance.as_ref().map(|a| a.height.as_slice()))
}

pub fn weight(hero: &Hero) -> String {
    measurement(hero.appearance.as_ref().map(|a| a.weight.as_slice()))
}

fn measurement(values: Option<&[String]>) -> String {
    match values {
        Some(values) if !values.is_empty() => values.join(" "),
        _ => UNKNOWN.to_string(),
    }
}
