//! Search status and result state

use super::grouping::{group_by_genre, GenreSection};
use super::types::SongRecord;

pub const PROMPT_MESSAGE: &str = "Type an artist or song to search.";
pub const LOADING_MESSAGE: &str = "Searching…";
pub const EMPTY_MESSAGE: &str = "No songs found. Try another search.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from the catalog.";
pub const CONNECTION_MESSAGE: &str =
    "Could not reach the catalog. Check your connection and try again.";

/// Why a search ended without results
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Unreachable host, relay failure, non-JSON body
    Connection,
    /// JSON arrived but without a usable `results` array
    UnexpectedResponse,
}

impl SearchFailure {
    pub fn message(self) -> &'static str {
        match self {
            SearchFailure::Connection => CONNECTION_MESSAGE,
            SearchFailure::UnexpectedResponse => UNEXPECTED_RESPONSE_MESSAGE,
        }
    }
}

/// A non-empty result set with its genre sections computed once
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResults {
    records: Vec<SongRecord>,
    sections: Vec<GenreSection>,
}

impl SearchResults {
    pub fn new(records: Vec<SongRecord>) -> Self {
        let sections = group_by_genre(&records).into_sections();
        Self { records, sections }
    }

    pub fn records(&self) -> &[SongRecord] {
        &self.records
    }

    pub fn sections(&self) -> &[GenreSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a position of the section-major display order
    pub fn display_record(&self, index: usize) -> Option<&SongRecord> {
        self.sections
            .iter()
            .flat_map(|s| s.records.iter())
            .nth(index)
    }
}

/// Everything the results pane can show
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchStatus {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A blank search was submitted
    Prompt,
    Loading { term: String },
    Empty,
    Ready(SearchResults),
    Failed(SearchFailure),
}

impl SearchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchStatus::Loading { .. })
    }

    pub fn results(&self) -> &[SongRecord] {
        match self {
            SearchStatus::Ready(results) => results.records(),
            _ => &[],
        }
    }

    pub fn sections(&self) -> &[GenreSection] {
        match self {
            SearchStatus::Ready(results) => results.sections(),
            _ => &[],
        }
    }

    /// Status line text; empty when results are on screen or nothing happened yet
    pub fn message(&self) -> &'static str {
        match self {
            SearchStatus::Idle | SearchStatus::Ready(_) => "",
            SearchStatus::Prompt => PROMPT_MESSAGE,
            SearchStatus::Loading { .. } => LOADING_MESSAGE,
            SearchStatus::Empty => EMPTY_MESSAGE,
            SearchStatus::Failed(failure) => failure.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64, genre: &str) -> SongRecord {
        SongRecord {
            track_id: Some(id),
            primary_genre_name: Some(genre.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn ready_status_exposes_sections_and_clears_message() {
        let status = SearchStatus::Ready(SearchResults::new(vec![
            song(1, "Jazz"),
            song(2, "Soul"),
            song(3, "Jazz"),
        ]));

        assert!(!status.is_loading());
        assert_eq!(status.results().len(), 3);
        assert_eq!(status.sections().len(), 2);
        assert_eq!(status.message(), "");
    }

    #[test]
    fn display_order_is_section_major() {
        let results = SearchResults::new(vec![song(1, "Jazz"), song(2, "Soul"), song(3, "Jazz")]);
        let ids: Vec<i64> = (0..results.len())
            .filter_map(|i| results.display_record(i))
            .filter_map(|r| r.track_id)
            .collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert!(results.display_record(3).is_none());
    }

    #[test]
    fn non_ready_states_have_no_results() {
        for status in [
            SearchStatus::Idle,
            SearchStatus::Prompt,
            SearchStatus::Loading { term: "x".into() },
            SearchStatus::Empty,
            SearchStatus::Failed(SearchFailure::Connection),
        ] {
            assert!(status.results().is_empty());
            assert!(status.sections().is_empty());
        }
    }

    #[test]
    fn messages_per_state() {
        assert_eq!(SearchStatus::Prompt.message(), PROMPT_MESSAGE);
        assert_eq!(SearchStatus::Loading { term: "x".into() }.message(), LOADING_MESSAGE);
        assert_eq!(SearchStatus::Empty.message(), EMPTY_MESSAGE);
        assert_eq!(
            SearchStatus::Failed(SearchFailure::UnexpectedResponse).message(),
            UNEXPECTED_RESPONSE_MESSAGE
        );
        assert_eq!(SearchStatus::Failed(SearchFailure::Connection).message(), CONNECTION_MESSAGE);
    }
}
