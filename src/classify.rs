//! Equipment classification by free-text category.
//!
//! Every category test in the crate goes through this module. Matching is a
//! case-insensitive substring search, so "4K Display", "display" and
//! "Large DISPLAY wall" all count as displays.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Keyword groups used by the cable selector and the route planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Speaker,
    Audio,
    Display,
    Distribution,
    Camera,
    Codec,
}

impl Keyword {
    const fn terms(self) -> &'static [&'static str] {
        match self {
            Keyword::Speaker => &["speaker"],
            Keyword::Audio => &["audio"],
            Keyword::Display => &["display", "monitor"],
            Keyword::Distribution => &["matrix", "switcher", "encoder", "decoder"],
            Keyword::Camera => &["camera"],
            Keyword::Codec => &["codec"],
        }
    }
}

/// Role bucket an item lands in when planning a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentRole {
    Source,
    Display,
    Switcher,
    Speaker,
}

impl EquipmentRole {
    const ALL: [EquipmentRole; 4] = [
        EquipmentRole::Source,
        EquipmentRole::Display,
        EquipmentRole::Switcher,
        EquipmentRole::Speaker,
    ];

    const fn terms(self) -> &'static [&'static str] {
        match self {
            EquipmentRole::Source => &["source", "camera", "player"],
            EquipmentRole::Display => &["display", "monitor", "projector"],
            EquipmentRole::Switcher => &["matrix", "switcher"],
            EquipmentRole::Speaker => &["speaker", "audio"],
        }
    }
}

struct Matchers {
    keywords: Vec<(Keyword, Regex)>,
    roles: Vec<(EquipmentRole, Regex)>,
}

fn any_of(terms: &[&str]) -> Result<Regex, regex::Error> {
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&alternation).case_insensitive(true).build()
}

fn build_matchers() -> Result<Matchers, regex::Error> {
    let keywords = [
        Keyword::Speaker,
        Keyword::Audio,
        Keyword::Display,
        Keyword::Distribution,
        Keyword::Camera,
        Keyword::Codec,
    ]
    .into_iter()
    .map(|kw| any_of(kw.terms()).map(|re| (kw, re)))
    .collect::<Result<_, regex::Error>>()?;

    let roles = EquipmentRole::ALL
        .into_iter()
        .map(|role| any_of(role.terms()).map(|re| (role, re)))
        .collect::<Result<_, regex::Error>>()?;

    Ok(Matchers { keywords, roles })
}

static MATCHERS: LazyLock<Matchers> = LazyLock::new(|| {
    build_matchers().expect("keyword terms are escaped literals and always compile")
});

/// Does the category mention any term of the keyword group?
pub fn category_mentions(category: &str, keyword: Keyword) -> bool {
    MATCHERS
        .keywords
        .iter()
        .find(|(kw, _)| *kw == keyword)
        .is_some_and(|(_, re)| re.is_match(category))
}

pub fn has_role(category: &str, role: EquipmentRole) -> bool {
    MATCHERS
        .roles
        .iter()
        .find(|(r, _)| *r == role)
        .is_some_and(|(_, re)| re.is_match(category))
}

/// Set of roles a category belongs to. Buckets are independent, so an
/// "Audio Source" is both a source and a speaker feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSet {
    pub source: bool,
    pub display: bool,
    pub switcher: bool,
    pub speaker: bool,
}

impl RoleSet {
    pub fn is_empty(&self) -> bool {
        !(self.source || self.display || self.switcher || self.speaker)
    }
}

pub fn classify(category: &str) -> RoleSet {
    RoleSet {
        source: has_role(category, EquipmentRole::Source),
        display: has_role(category, EquipmentRole::Display),
        switcher: has_role(category, EquipmentRole::Switcher),
        speaker: has_role(category, EquipmentRole::Speaker),
    }
}
