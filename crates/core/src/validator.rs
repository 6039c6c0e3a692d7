//! Payload validation and sanitization for catalog API responses.
//!
//! Pure logic over [`serde_json::Value`]. The page envelope is checked
//! strictly, but individual items never abort a page: an item that fails
//! [`sanitize_hero`] is replaced with a placeholder built from whatever
//! fields can be salvaged, so the caller always has a renderable list.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::hero::{
    Appearance, Biography, Connections, Hero, HeroId, HeroImages, HeroPage, PowerStats, Work,
    IMAGE_SIZES, POWER_STAT_NAMES,
};

/// Name given to placeholder rows.
pub const UNKNOWN_HERO_NAME: &str = "Unknown Hero";

/// Slug given to placeholder rows.
pub const UNKNOWN_HERO_SLUG: &str = "unknown-hero";

// ---------------------------------------------------------------------------
// Heroes
// ---------------------------------------------------------------------------

/// Check a hero payload, reporting the first defect found.
pub fn check_hero(value: &Value) -> Result<(), ValidationError> {
    let obj = value
        .as_object()
        .ok_or(ValidationError::NotAnObject { entity: "hero" })?;

    if positive_id(obj.get("id")).is_none() {
        return Err(ValidationError::InvalidId);
    }
    if non_blank(obj.get("name")).is_none() {
        return Err(ValidationError::MissingText { field: "name" });
    }
    if non_blank(obj.get("slug")).is_none() {
        return Err(ValidationError::MissingText { field: "slug" });
    }

    if let Some(stats) = present(obj, "powerstats") {
        let valid = stats
            .as_object()
            .is_some_and(|map| POWER_STAT_NAMES.iter().all(|name| is_stat(map.get(*name))));
        if !valid {
            return Err(ValidationError::InvalidGroup {
                group: "powerstats",
            });
        }
    }

    for group in ["appearance", "biography", "work", "connections"] {
        if present(obj, group).is_some_and(|v| !v.is_object()) {
            return Err(ValidationError::InvalidGroup { group });
        }
    }

    if let Some(images) = present(obj, "images") {
        let images = images
            .as_object()
            .ok_or(ValidationError::InvalidGroup { group: "images" })?;
        let has_url = IMAGE_SIZES
            .iter()
            .any(|size| non_blank(images.get(*size)).is_some());
        if !has_url {
            return Err(ValidationError::NoImageUrl);
        }
    }

    Ok(())
}

/// Whether `value` has the shape of a hero.
pub fn is_valid_hero(value: &Value) -> bool {
    check_hero(value).is_ok()
}

/// Normalize a hero payload.
///
/// Name and slug are trimmed, absent attribute groups become `None`, and a
/// missing image set becomes four empty URLs.
pub fn sanitize_hero(value: &Value) -> Result<Hero, ValidationError> {
    check_hero(value)?;
    let obj = value
        .as_object()
        .ok_or(ValidationError::NotAnObject { entity: "hero" })?;

    let group = |key: &str| present(obj, key).and_then(Value::as_object);

    Ok(Hero {
        id: positive_id(obj.get("id")).ok_or(ValidationError::InvalidId)?,
        name: non_blank(obj.get("name"))
            .ok_or(ValidationError::MissingText { field: "name" })?
            .to_string(),
        slug: non_blank(obj.get("slug"))
            .ok_or(ValidationError::MissingText { field: "slug" })?
            .to_string(),
        powerstats: group("powerstats").map(PowerStats::from_json),
        appearance: group("appearance").map(Appearance::from_json),
        biography: group("biography").map(Biography::from_json),
        work: group("work").map(Work::from_json),
        connections: group("connections").map(Connections::from_json),
        images: group("images").map(HeroImages::from_json).unwrap_or_default(),
    })
}

/// Minimal hero built from whatever an invalid item still carries.
pub fn placeholder_hero(value: &Value) -> Hero {
    let fields = value.as_object();
    let field = |key: &str| fields.and_then(|obj| obj.get(key));

    Hero {
        id: positive_id(field("id")).unwrap_or(0),
        name: non_blank(field("name"))
            .unwrap_or(UNKNOWN_HERO_NAME)
            .to_string(),
        slug: non_blank(field("slug"))
            .unwrap_or(UNKNOWN_HERO_SLUG)
            .to_string(),
        powerstats: None,
        appearance: None,
        biography: None,
        work: None,
        connections: None,
        images: field("images")
            .and_then(Value::as_object)
            .map(HeroImages::from_json)
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Validated envelope fields, borrowed from the payload.
struct Envelope<'a> {
    length: u64,
    size: u64,
    page: u64,
    first_page: u64,
    last_page: u64,
    start_index: u64,
    end_index: u64,
    items: &'a [Value],
}

fn envelope(value: &Value) -> Result<Envelope<'_>, ValidationError> {
    let obj = value
        .as_object()
        .ok_or(ValidationError::NotAnObject { entity: "page" })?;

    let number = |field: &'static str, min: u64| {
        whole_number(obj.get(field))
            .filter(|n| *n >= min)
            .ok_or(ValidationError::PageFieldOutOfRange { field, min })
    };

    Ok(Envelope {
        length: number("length", 0)?,
        size: number("size", 1)?,
        page: number("page", 1)?,
        first_page: number("firstPage", 1)?,
        last_page: number("lastPage", 1)?,
        start_index: number("startIndex", 0)?,
        end_index: number("endIndex", 0)?,
        items: obj
            .get("items")
            .and_then(Value::as_array)
            .ok_or(ValidationError::ItemsNotArray)?,
    })
}

/// Check a page envelope.
///
/// Items are not required to be valid heroes; on success the number of
/// invalid items is returned (and logged) instead.
pub fn check_page(value: &Value) -> Result<usize, ValidationError> {
    let envelope = envelope(value)?;
    let invalid_items = envelope
        .items
        .iter()
        .filter(|item| !is_valid_hero(item))
        .count();
    if invalid_items > 0 {
        tracing::warn!(
            invalid_items,
            "Found invalid hero items in paginated response",
        );
    }
    Ok(invalid_items)
}

/// Whether `value` has the shape of a page envelope.
pub fn is_valid_page(value: &Value) -> bool {
    check_page(value).is_ok()
}

/// Normalize a page payload.
///
/// Fails only when the envelope itself is malformed. Every item is run
/// through [`sanitize_hero`]; failures are logged and replaced with a
/// [`placeholder_hero`].
pub fn sanitize_page(value: &Value) -> Result<HeroPage, ValidationError> {
    let envelope = envelope(value)?;

    let mut placeholders = 0usize;
    let items = envelope
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            sanitize_hero(item).unwrap_or_else(|e| {
                tracing::warn!(index, error = %e, "Failed to sanitize hero item");
                placeholders += 1;
                placeholder_hero(item)
            })
        })
        .collect();

    if placeholders > 0 {
        tracing::warn!(
            placeholders,
            page = envelope.page,
            "Substituted placeholder heroes in paginated response",
        );
    }

    Ok(HeroPage {
        length: envelope.length,
        size: envelope.size,
        page: envelope.page,
        first_page: envelope.first_page,
        last_page: envelope.last_page,
        start_index: envelope.start_index,
        end_index: envelope.end_index,
        items,
    })
}

// ---- private helpers ----

/// Explicit-null and falsy scalars count as absent.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    })
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// A non-negative integer, accepting floats with no fractional part.
fn whole_number(value: Option<&Value>) -> Option<u64> {
    let Value::Number(n) = value? else {
        return None;
    };
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn positive_id(value: Option<&Value>) -> Option<HeroId> {
    whole_number(value)
        .filter(|n| *n > 0)
        .and_then(|n| HeroId::try_from(n).ok())
}

fn is_stat(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Number(_)) => true,
        Some(Value::String(s)) => {
            let s = s.trim();
            s == "null" || s.is_empty() || numeric_text(s)
        }
        Some(_) => false,
    }
}

/// Decimal text, or the spelled-out `Infinity`. Rejects `NaN` and the
/// lowercase `inf`/`infinity` forms `f64::from_str` also accepts.
fn numeric_text(s: &str) -> bool {
    match s.parse::<f64>() {
        Ok(f) if f.is_nan() => false,
        Ok(f) if f.is_infinite() => {
            s.trim_start_matches(['+', '-']) == "Infinity"
        }
        Ok(_) => true,
        Err(_) => false,
    }
}
