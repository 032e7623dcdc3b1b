//! Movie summary model and its display formatting.

use serde::{Deserialize, Serialize};

/// Placeholder shown wherever a value is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single movie record as returned by the remote listing endpoints.
///
/// Records are immutable once received. Fields the API omits (or sends as
/// `null`) are `None`; fields this model does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Identifier, unique within one result set
    pub id: u64,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Relative poster image path, e.g. `/abc.jpg`
    #[serde(default)]
    pub poster_path: Option<String>,
    /// ISO release date, e.g. `2024-05-15`
    #[serde(default)]
    pub release_date: Option<String>,
    /// Two-letter language code
    #[serde(default)]
    pub original_language: Option<String>,
}

impl MovieSummary {
    /// Creates a summary with only an id and title set.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            vote_average: None,
            poster_path: None,
            release_date: None,
            original_language: None,
        }
    }

    /// Rating rounded to one decimal place, or `N/A` when unrated.
    ///
    /// The API reports movies without votes as `0`, which is shown as
    /// unrated as well.
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(rating) if rating > 0.0 && rating.is_finite() => format!("{rating:.1}"),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Release year taken from the leading segment of the release date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()))
    }

    /// Release year, or `N/A` when the date is missing or malformed.
    pub fn release_year_label(&self) -> &str {
        self.release_year().unwrap_or(NOT_AVAILABLE)
    }

    /// Language code, or `N/A` when missing.
    pub fn language_label(&self) -> &str {
        self.original_language
            .as_deref()
            .filter(|lang| !lang.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Poster image URL, falling back to `placeholder` when there is no poster.
    pub fn poster_src(&self, image_base_url: &str, placeholder: &str) -> String {
        match self.poster_path.as_deref().filter(|path| !path.is_empty()) {
            Some(path) => format!(
                "{}/{}",
                image_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => placeholder.to_string(),
        }
    }
}
