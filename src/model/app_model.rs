//! Main application model with state management

use super::grouping::GenreSection;
use super::status::{SearchFailure, SearchResults, SearchStatus};
use super::types::{ActiveSection, SongRecord};

/// Issued when a search starts; only the newest ticket may publish results
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    term: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

/// Main application model containing all screen state
#[derive(Clone, Debug)]
pub struct AppModel {
    query: String,
    status: SearchStatus,
    active_section: ActiveSection,
    selected: usize,
    grid_columns: usize,
    latest_seq: u64,
    should_quit: bool,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            status: SearchStatus::Idle,
            active_section: ActiveSection::SearchBox,
            selected: 0,
            grid_columns: 1,
            latest_seq: 0,
            should_quit: false,
        }
    }

    // ========================================================================
    // Search lifecycle
    // ========================================================================

    /// Start a search for `raw`.
    ///
    /// A blank term only sets the prompt and returns `None`. Otherwise the
    /// previous results are dropped, the status becomes `Loading` and a
    /// ticket carrying the next sequence number is returned.
    pub fn begin_search(&mut self, raw: &str) -> Option<SearchTicket> {
        let term = raw.trim();
        if term.is_empty() {
            self.status = SearchStatus::Prompt;
            return None;
        }

        self.latest_seq += 1;
        self.selected = 0;
        self.status = SearchStatus::Loading {
            term: term.to_string(),
        };

        Some(SearchTicket {
            seq: self.latest_seq,
            term: term.to_string(),
        })
    }

    /// Apply the outcome of a search.
    ///
    /// Returns `false` and leaves the state alone when a newer search has
    /// been started since `ticket` was issued.
    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<SongRecord>, SearchFailure>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                term = ticket.term(),
                seq = ticket.seq,
                latest = self.latest_seq,
                "Discarding stale search result"
            );
            return false;
        }

        self.selected = 0;
        self.status = match outcome {
            Ok(records) if records.is_empty() => SearchStatus::Empty,
            Ok(records) => SearchStatus::Ready(SearchResults::new(records)),
            Err(failure) => SearchStatus::Failed(failure),
        };
        true
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn results(&self) -> &[SongRecord] {
        self.status.results()
    }

    pub fn sections(&self) -> &[GenreSection] {
        self.status.sections()
    }

    pub fn message(&self) -> &'static str {
        self.status.message()
    }

    // ========================================================================
    // Query editing
    // ========================================================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn update_search_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn append_to_search(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace_search(&mut self) {
        self.query.pop();
    }

    // ========================================================================
    // Focus & selection
    // ========================================================================

    pub fn active_section(&self) -> ActiveSection {
        self.active_section
    }

    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.active_section = section;
    }

    pub fn cycle_section_forward(&mut self) {
        self.active_section = self.active_section.next();
    }

    pub fn cycle_section_backward(&mut self) {
        self.active_section = self.active_section.prev();
    }

    /// Index of the selected card in section-major display order
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&SongRecord> {
        match &self.status {
            SearchStatus::Ready(results) => results.display_record(self.selected),
            _ => None,
        }
    }

    /// Cards per grid row at the current terminal width
    pub fn set_grid_columns(&mut self, columns: usize) {
        self.grid_columns = columns.max(1);
    }

    pub fn move_selection_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_selection_right(&mut self) {
        if self.selected + 1 < self.results().len() {
            self.selected += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        let lens = self.section_lens();
        if let Some(index) = step_vertical(&lens, self.grid_columns, self.selected, false) {
            self.selected = index;
        }
    }

    pub fn move_selection_down(&mut self) {
        let lens = self.section_lens();
        if let Some(index) = step_vertical(&lens, self.grid_columns, self.selected, true) {
            self.selected = index;
        }
    }

    fn section_lens(&self) -> Vec<usize> {
        self.sections().iter().map(|s| s.records.len()).collect()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }
}

/// Move one grid row up or down across sections.
///
/// Sections each start on a fresh row. The column is kept where possible and
/// clamped to the length of a shorter target row.
fn step_vertical(section_lens: &[usize], columns: usize, flat: usize, down: bool) -> Option<usize> {
    let columns = columns.max(1);

    let mut start = 0;
    let mut section = None;
    for (i, len) in section_lens.iter().enumerate() {
        if flat < start + len {
            section = Some((i, flat - start, start));
            break;
        }
        start += len;
    }
    let (section, offset, start) = section?;
    let len = section_lens[section];
    let row = offset / columns;
    let col = offset % columns;
    let rows = len.div_ceil(columns);

    if down {
        if row + 1 < rows {
            return Some(start + ((row + 1) * columns + col).min(len - 1));
        }
        let next_start = start + len;
        let next_len = *section_lens.get(section + 1)?;
        Some(next_start + col.min(next_len - 1))
    } else {
        if row > 0 {
            return Some(start + (row - 1) * columns + col);
        }
        let prev_len = *section_lens.get(section.checked_sub(1)?)?;
        let prev_start = start - prev_len;
        let last_row = (prev_len - 1) / columns;
        let last_row_len = prev_len - last_row * columns;
        Some(prev_start + last_row * columns + col.min(last_row_len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::{EMPTY_MESSAGE, LOADING_MESSAGE, PROMPT_MESSAGE};

    fn song(id: i64, genre: &str) -> SongRecord {
        SongRecord {
            track_id: Some(id),
            track_name: Some(format!("Track {id}")),
            primary_genre_name: Some(genre.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn blank_search_prompts_without_ticket() {
        let mut model = AppModel::new();
        assert!(model.begin_search("").is_none());
        assert!(model.begin_search("   ").is_none());
        assert_eq!(model.message(), PROMPT_MESSAGE);
        assert!(!model.is_loading());
    }

    #[test]
    fn search_start_clears_results_and_loads() {
        let mut model = AppModel::new();
        let first = model.begin_search("jazz").unwrap();
        model.finish_search(&first, Ok(vec![song(1, "Jazz")]));
        assert_eq!(model.results().len(), 1);

        let second = model.begin_search("  blues ").unwrap();
        assert_eq!(second.term(), "blues");
        assert!(model.is_loading());
        assert!(model.results().is_empty());
        assert_eq!(model.message(), LOADING_MESSAGE);
    }

    #[test]
    fn finish_resolves_every_outcome_out_of_loading() {
        let mut model = AppModel::new();

        let ticket = model.begin_search("a").unwrap();
        assert!(model.finish_search(&ticket, Ok(vec![])));
        assert!(!model.is_loading());
        assert_eq!(model.message(), EMPTY_MESSAGE);

        let ticket = model.begin_search("b").unwrap();
        assert!(model.finish_search(&ticket, Err(SearchFailure::Connection)));
        assert!(!model.is_loading());
        assert!(model.results().is_empty());
        assert_eq!(model.status(), &SearchStatus::Failed(SearchFailure::Connection));

        let ticket = model.begin_search("c").unwrap();
        assert!(model.finish_search(&ticket, Ok(vec![song(1, "Jazz"), song(2, "Pop")])));
        assert_eq!(model.sections().len(), 2);
        assert_eq!(model.message(), "");
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut model = AppModel::new();
        let old = model.begin_search("old").unwrap();
        let new = model.begin_search("new").unwrap();
        assert!(new.seq() > old.seq());

        assert!(model.finish_search(&new, Ok(vec![song(2, "Pop")])));
        assert!(!model.finish_search(&old, Ok(vec![song(1, "Jazz"), song(3, "Jazz")])));

        let ids: Vec<i64> = model.results().iter().filter_map(|r| r.track_id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn stale_failure_does_not_end_newer_loading() {
        let mut model = AppModel::new();
        let old = model.begin_search("old").unwrap();
        let _new = model.begin_search("new").unwrap();

        assert!(!model.finish_search(&old, Err(SearchFailure::Connection)));
        assert!(model.is_loading());
    }

    #[test]
    fn horizontal_selection_stays_in_bounds() {
        let mut model = AppModel::new();
        let ticket = model.begin_search("x").unwrap();
        model.finish_search(&ticket, Ok(vec![song(1, "A"), song(2, "A")]));

        model.move_selection_left();
        assert_eq!(model.selected(), 0);
        model.move_selection_right();
        model.move_selection_right();
        assert_eq!(model.selected(), 1);
        assert_eq!(model.selected_record().and_then(|r| r.track_id), Some(2));
    }

    #[test]
    fn vertical_steps_within_a_section() {
        // one section of 5 cards, 3 per row: rows [0 1 2] [3 4]
        assert_eq!(step_vertical(&[5], 3, 1, true), Some(4));
        assert_eq!(step_vertical(&[5], 3, 2, true), Some(4));
        assert_eq!(step_vertical(&[5], 3, 4, false), Some(1));
        assert_eq!(step_vertical(&[5], 3, 4, true), None);
        assert_eq!(step_vertical(&[5], 3, 0, false), None);
    }

    #[test]
    fn vertical_steps_across_sections() {
        // sections of 4 and 2 cards, 3 per row: [0 1 2] [3] | [4 5]
        assert_eq!(step_vertical(&[4, 2], 3, 3, true), Some(4));
        assert_eq!(step_vertical(&[4, 2], 3, 2, true), Some(3));
        assert_eq!(step_vertical(&[4, 2], 3, 5, false), Some(3));
        assert_eq!(step_vertical(&[4, 2], 3, 4, false), Some(3));
    }

    #[test]
    fn vertical_move_uses_grid_columns() {
        let mut model = AppModel::new();
        let ticket = model.begin_search("x").unwrap();
        model.finish_search(&ticket, Ok((1..=4).map(|i| song(i, "A")).collect()));
        model.set_grid_columns(2);

        model.move_selection_down();
        assert_eq!(model.selected(), 2);
        model.move_selection_down();
        assert_eq!(model.selected(), 2);
        model.move_selection_up();
        assert_eq!(model.selected(), 0);
    }
}
