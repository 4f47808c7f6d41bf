//! Client-side listing filter.
//!
//! A linear predicate scan over the in-memory listings: categorical genre/key
//! gates plus a multi-term AND free-text query. Input order is preserved.

use serde::{Deserialize, Serialize};

use crate::catalog::Project;

pub const ALL_GENRES: &str = "All Genres";
pub const ALL_KEYS: &str = "All Keys";

pub const DEFAULT_MIN_BPM: u32 = 0;
pub const DEFAULT_MAX_BPM: u32 = 300;
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// What the user currently filters the listing grid by.
///
/// The bpm and price ranges are carried for the filter bar but are not
/// applied by [`filter_projects`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub genre: String,
    pub key: String,
    pub min_bpm: u32,
    pub max_bpm: u32,
    pub min_price: f64,
    pub max_price: f64,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            genre: ALL_GENRES.to_string(),
            key: ALL_KEYS.to_string(),
            min_bpm: DEFAULT_MIN_BPM,
            max_bpm: DEFAULT_MAX_BPM,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            search_query: String::new(),
        }
    }
}

impl FilterState {
    /// Restores genre, key and query to their defaults. Ranges are kept.
    pub fn reset_search(&mut self) {
        self.genre = ALL_GENRES.to_string();
        self.key = ALL_KEYS.to_string();
        self.search_query.clear();
    }

    pub fn with_query<T: Into<String>>(mut self, query: T) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_genre<T: Into<String>>(mut self, genre: T) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_key<T: Into<String>>(mut self, key: T) -> Self {
        self.key = key.into();
        self
    }

    /// True when no gate can exclude anything.
    pub fn is_identity(&self) -> bool {
        self.genre == ALL_GENRES && self.key == ALL_KEYS && self.search_query.trim().is_empty()
    }

    fn matches_genre(&self, project: &Project) -> bool {
        self.genre == ALL_GENRES || project.genre == self.genre
    }

    fn matches_key(&self, project: &Project) -> bool {
        self.key == ALL_KEYS || project.key == self.key
    }
}

/// Lower-cased query terms, empty when the query is blank.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// The text a free-text query is matched against.
pub fn searchable_content(project: &Project) -> String {
    format!(
        "{} {} {} {} {}",
        project.title,
        project.producer,
        project.genre,
        project.key,
        project.tags.join(" ")
    )
    .to_lowercase()
}

fn matches_terms(project: &Project, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let content = searchable_content(project);
    terms.iter().all(|term| content.contains(term.as_str()))
}

/// Returns the listings passing the genre, key and free-text gates, in input order.
pub fn filter_projects<'a>(projects: &'a [Project], filters: &FilterState) -> Vec<&'a Project> {
    let terms = query_terms(&filters.search_query);
    projects
        .iter()
        .filter(|p| filters.matches_genre(p) && filters.matches_key(p) && matches_terms(p, &terms))
        .collect()
}

/// Distinct genres in first-seen order.
pub fn available_genres(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().map(|p| p.genre.as_str()))
}

/// Distinct keys in first-seen order.
pub fn available_keys(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().map(|p| p.key.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
