//! Hero catalog domain models.
//!
//! Field names follow the camelCase wire format of the catalog API. Every
//! attribute group is built leniently from a JSON object: sub-fields of the
//! wrong type are dropped rather than failing the whole record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog identifiers are positive integers assigned by the API.
pub type HeroId = i64;

/// Combat statistics, each on a 0-100 scale when known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerStats {
    pub intelligence: Option<i64>,
    pub strength: Option<i64>,
    pub speed: Option<i64>,
    pub durability: Option<i64>,
    pub power: Option<i64>,
    pub combat: Option<i64>,
}

/// Stat keys in display order.
pub const POWER_STAT_NAMES: [&str; 6] = [
    "intelligence",
    "strength",
    "speed",
    "durability",
    "power",
    "combat",
];

impl PowerStats {
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        Self {
            intelligence: obj.get("intelligence").and_then(stat_number),
            strength: obj.get("strength").and_then(stat_number),
            speed: obj.get("speed").and_then(stat_number),
            durability: obj.get("durability").and_then(stat_number),
            power: obj.get("power").and_then(stat_number),
            combat: obj.get("combat").and_then(stat_number),
        }
    }

    /// `(name, value)` pairs in [`POWER_STAT_NAMES`] order.
    pub fn entries(&self) -> [(&'static str, Option<i64>); 6] {
        [
            ("intelligence", self.intelligence),
            ("strength", self.strength),
            ("speed", self.speed),
            ("durability", self.durability),
            ("power", self.power),
            ("combat", self.combat),
        ]
    }
}

/// Physical appearance. Height and weight come as one entry per unit
/// system, e.g. `["6'2", "188 cm"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appearance {
    pub gender: Option<String>,
    pub race: Option<String>,
    pub height: Vec<String>,
    pub weight: Vec<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

impl Appearance {
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        Self {
            gender: text(obj, "gender"),
            race: text(obj, "race"),
            height: text_list(obj, "height"),
            weight: text_list(obj, "weight"),
            eye_color: text(obj, "eyeColor"),
            hair_color: text(obj, "hairColor"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Biography {
    pub full_name: Option<String>,
    pub alter_egos: Option<String>,
    pub aliases: Vec<String>,
    pub place_of_birth: Option<String>,
    pub first_appearance: Option<String>,
    pub publisher: Option<String>,
    pub alignment: Option<String>,
}

impl Biography {
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        Self {
            full_name: text(obj, "fullName"),
            alter_egos: text(obj, "alterEgos"),
            aliases: text_list(obj, "aliases"),
            place_of_birth: text(obj, "placeOfBirth"),
            first_appearance: text(obj, "firstAppearance"),
            publisher: text(obj, "publisher"),
            alignment: text(obj, "alignment"),
        }
    }
}

/// Occupation info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Work {
    pub occupation: Option<String>,
    pub base: Option<String>,
}

impl Work {
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        Self {
            occupation: text(obj, "occupation"),
            base: text(obj, "base"),
        }
    }
}

/// Affiliation info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Connections {
    pub group_affiliation: Option<String>,
    pub relatives: Option<String>,
}

impl Connections {
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        Self {
            group_affiliation: text(obj, "groupAffiliation"),
            relatives: text(obj, "relatives"),
        }
    }
}

/// Portrait URLs in four size variants. Any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroImages {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// Image-set keys, smallest first.
pub const IMAGE_SIZES: [&str; 4] = ["xs", "sm", "md", "lg"];

impl HeroImages {
    /// Copy every string URL present; anything else becomes `""`.
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        let url = |key: &str| text(obj, key).unwrap_or_default();
        Self {
            xs: url("xs"),
            sm: url("sm"),
            md: url("md"),
            lg: url("lg"),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub slug: String,
    pub powerstats: Option<PowerStats>,
    pub appearance: Option<Appearance>,
    pub biography: Option<Biography>,
    pub work: Option<Work>,
    pub connections: Option<Connections>,
    #[serde(default)]
    pub images: HeroImages,
}

/// One page of the hero listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPage {
    /// Total number of heroes across all pages.
    pub length: u64,
    pub size: u64,
    pub page: u64,
    pub first_page: u64,
    pub last_page: u64,
    pub start_index: u64,
    pub end_index: u64,
    /// May be shorter than `size` on the last page.
    pub items: Vec<Hero>,
}

/// Listing query parameters (`?page=&size=`).
///
/// `None` and zero both mean "let the API pick its default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PaginationParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Query pairs to send, skipping unset and zero values.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size.filter(|s| *s > 0) {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

// ---- lenient field extraction ----

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// A string array, or a lone string promoted to a one-element list.
fn text_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Read a stat that may be a number, a numeric string, or `"null"`.
fn stat_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    }
}
