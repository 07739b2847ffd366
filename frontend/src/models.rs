use crate::error::ApiError;
use crate::utils::{parse_rating, parse_runtime_minutes};
use serde::{Deserialize, Serialize};

/// One row of a title search.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

// The upstream answers 200 for misses too and flags them with "Response": "False".
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchResult>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn into_results(self) -> Result<Vec<SearchResult>, ApiError> {
        if is_success(&self.response) {
            log::debug!(
                "search page holds {} of {} results",
                self.search.len(),
                self.total_results.as_deref().unwrap_or("?")
            );
            Ok(self.search)
        } else {
            log::debug!("search miss: {}", self.error.as_deref().unwrap_or("no reason given"));
            Err(ApiError::NoResults)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct MovieDetail {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub detail: MovieDetail,
}

impl DetailResponse {
    pub fn into_detail(self) -> Result<MovieDetail, ApiError> {
        if is_success(&self.response) {
            Ok(self.detail)
        } else {
            log::debug!("detail miss: {}", self.error.as_deref().unwrap_or("no reason given"));
            Err(ApiError::NoResults)
        }
    }
}

fn is_success(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

/// A rated movie on the watched list. Field names match what earlier
/// versions wrote to local storage.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WatchedEntry {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub poster: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<f64>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(rename = "userRating", default)]
    pub user_rating: Option<u8>,
}

impl WatchedEntry {
    pub fn from_detail(imdb_id: &str, detail: &MovieDetail, user_rating: Option<u8>) -> Self {
        Self {
            imdb_id: imdb_id.to_string(),
            title: detail.title.clone().unwrap_or_default(),
            year: detail.year.clone().unwrap_or_default(),
            poster: detail.poster.clone().unwrap_or_default(),
            imdb_rating: detail.imdb_rating.as_deref().and_then(parse_rating),
            runtime: detail.runtime.as_deref().and_then(parse_runtime_minutes),
            user_rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: Option<f64>,
    pub avg_user_rating: Option<f64>,
    pub avg_runtime: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_hit_yields_rows() {
        let body = r#"{
            "Search": [{"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "https://m.media-amazon.com/inception.jpg"}],
            "totalResults": "1",
            "Response": "True"
        }"#;
        let results = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_results()
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].imdb_id, "tt1375666");
        assert_eq!(results[0].title, "Inception");
        assert_eq!(results[0].year, "2010");
    }

    #[test]
    fn search_miss_is_no_results() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let outcome = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_results();
        assert_eq!(outcome, Err(ApiError::NoResults));
    }

    #[test]
    fn detail_tolerates_missing_fields() {
        let body = r#"{"Title": "Inception", "Runtime": "148 min", "imdbRating": "8.8", "Response": "True"}"#;
        let detail = serde_json::from_str::<DetailResponse>(body)
            .unwrap()
            .into_detail()
            .unwrap();
        assert_eq!(detail.title.as_deref(), Some("Inception"));
        assert_eq!(detail.plot, None);
        assert_eq!(detail.director, None);
    }

    #[test]
    fn detail_miss_is_an_error() {
        let body = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let outcome = serde_json::from_str::<DetailResponse>(body)
            .unwrap()
            .into_detail();
        assert_eq!(outcome, Err(ApiError::NoResults));
    }

    #[test]
    fn watched_entry_parses_numeric_fields() {
        let detail = MovieDetail {
            title: Some("Inception".into()),
            year: Some("2010".into()),
            runtime: Some("148 min".into()),
            imdb_rating: Some("8.8".into()),
            ..MovieDetail::default()
        };
        let entry = WatchedEntry::from_detail("tt1375666", &detail, Some(9));
        assert_eq!(entry.imdb_id, "tt1375666");
        assert_eq!(entry.runtime, Some(148));
        assert_eq!(entry.imdb_rating, Some(8.8));
        assert_eq!(entry.user_rating, Some(9));
    }

    #[test]
    fn watched_entry_reads_legacy_json() {
        // NaN ratings were written as null
        let stored = r#"{"imdbID": "tt0133093", "title": "The Matrix", "year": "1999", "poster": "p.jpg", "imdbRating": null, "runtime": 136, "rating": "8.7"}"#;
        let entry: WatchedEntry = serde_json::from_str(stored).unwrap();
        assert_eq!(entry.imdb_rating, None);
        assert_eq!(entry.runtime, Some(136));
        assert_eq!(entry.user_rating, None);
    }
}
