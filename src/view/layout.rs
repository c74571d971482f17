//! Layout rendering (top bar, results body, footer)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, AppModel, SearchStatus};
use super::grid;
use super::utils::truncate_string;

const SEARCH_BUTTON: &str = "[ Search ]";

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

pub fn render_top_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                                 // Search input
            Constraint::Length(SEARCH_BUTTON.len() as u16 + 2), // Button
        ])
        .split(area);

    let box_focused = model.active_section() == ActiveSection::SearchBox;

    let (search_text, search_style) = if model.query().is_empty() {
        ("Type to search...", Style::default().fg(Color::DarkGray))
    } else if box_focused {
        (model.query(), Style::default().fg(Color::Green))
    } else {
        (model.query(), Style::default().fg(Color::White))
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(focus_style(box_focused)),
    );
    frame.render_widget(search, chunks[0]);

    if box_focused {
        // border + padding, then the end of the query
        let query_len = u16::try_from(model.query().chars().count()).unwrap_or(u16::MAX);
        let x = chunks[0].x.saturating_add(2).saturating_add(query_len);
        let max_x = chunks[0].right().saturating_sub(2);
        frame.set_cursor_position((x.min(max_x), chunks[0].y + 1));
    }

    let button_focused = model.active_section() == ActiveSection::SearchButton;
    let button_style = if button_focused {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let button = Paragraph::new(Line::from(Span::styled(SEARCH_BUTTON, button_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(button_focused)),
        );
    frame.render_widget(button, chunks[1]);
}

pub fn render_results(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.active_section() == ActiveSection::Results;
    let status = model.status();

    let title = match status {
        SearchStatus::Ready(results) => format!(" Results ({}) ", results.len()),
        SearchStatus::Loading { term } => format!(" Results for \"{}\" ", term),
        _ => " Results ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(focus_style(is_focused));

    // Message and grid are mutually exclusive
    if let SearchStatus::Ready(results) = status {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        grid::render_grid(frame, inner, results.sections(), model.selected(), is_focused);
        return;
    }

    let (text, style) = match status {
        SearchStatus::Idle => (
            "Type in search and press Enter to find music\n\nUse Tab to move between the search box, the button and the results\nUse arrow keys to browse results",
            Style::default().fg(Color::DarkGray),
        ),
        SearchStatus::Loading { .. } => (status.message(), Style::default().fg(Color::Yellow)),
        SearchStatus::Failed(_) => (status.message(), Style::default().fg(Color::Red)),
        _ => (status.message(), Style::default().fg(Color::DarkGray)),
    };

    let message = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(message, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, model: &AppModel) {
    let hints = " Enter search · Tab focus · ←↑↓→ browse · Ctrl+C quit ";

    let line = match model.selected_record() {
        Some(record) if model.active_section() == ActiveSection::Results => {
            let artwork = if record.artwork().is_empty() { "-" } else { record.artwork() };
            let room = (area.width as usize).saturating_sub(hints.chars().count() + 10);
            Line::from(vec![
                Span::styled(" Artwork: ", Style::default().fg(Color::DarkGray)),
                Span::styled(truncate_string(artwork, room), Style::default().fg(Color::Cyan)),
                Span::styled(hints, Style::default().fg(Color::DarkGray)),
            ])
        }
        _ => Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Width the grid gets inside the results block
pub fn results_inner_width(total_width: u16) -> u16 {
    // borders + horizontal padding
    total_width.saturating_sub(4)
}
