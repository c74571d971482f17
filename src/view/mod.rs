//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It only reads the model; nothing here changes state.
//!
//! - `utils`: Text fitting helpers (truncation, wrapping)
//! - `layout`: Screen structure (top bar, results body, footer)
//! - `grid`: Genre sections and song cards

mod utils;
mod layout;
mod grid;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::AppModel;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + button
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], model);
        layout::render_results(frame, chunks[1], model);
        layout::render_footer(frame, chunks[2], model);
    }

    /// Cards per grid row for a terminal `width` columns wide
    pub fn grid_columns(width: u16) -> usize {
        grid::columns_for_width(layout::results_inner_width(width))
    }
}
