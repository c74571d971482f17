//! Sectioned card grid for search results

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{GenreSection, SongRecord};
use super::utils::{truncate_string, wrap_lines};

/// Outer card width including borders
pub const CARD_WIDTH: u16 = 22;
/// Outer card height: borders, artwork, two title lines, artist, year
pub const CARD_HEIGHT: usize = 7;
const CARD_GAP: u16 = 1;
const TITLE_LINES: usize = 2;

/// Where a card sits on the unscrolled grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSlot {
    pub section: usize,
    /// Position in `section`
    pub item: usize,
    pub x: u16,
    pub y: usize,
}

/// Unscrolled positions of every heading and card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    /// Row of each section heading
    pub headings: Vec<usize>,
    /// Cards in section-major display order
    pub cards: Vec<CardSlot>,
}

/// How many cards fit side by side in `width` columns
pub fn columns_for_width(width: u16) -> usize {
    ((width.saturating_add(CARD_GAP) / (CARD_WIDTH + CARD_GAP)) as usize).max(1)
}

pub fn layout_grid(section_lens: &[usize], width: u16) -> GridLayout {
    let columns = columns_for_width(width);
    let mut headings = Vec::with_capacity(section_lens.len());
    let mut cards = Vec::new();
    let mut y = 0;

    for (section, &len) in section_lens.iter().enumerate() {
        headings.push(y);
        y += 1;
        for item in 0..len {
            let row = item / columns;
            let col = item % columns;
            cards.push(CardSlot {
                section,
                item,
                x: col as u16 * (CARD_WIDTH + CARD_GAP),
                y: y + row * CARD_HEIGHT,
            });
        }
        // Card rows plus a spacer before the next heading
        y += len.div_ceil(columns) * CARD_HEIGHT + 1;
    }

    GridLayout {
        columns,
        headings,
        cards,
    }
}

/// First visible row so the selected card fits in a viewport of `height` rows
pub fn scroll_offset(layout: &GridLayout, selected: usize, height: usize) -> usize {
    let Some(card) = layout.cards.get(selected) else {
        return 0;
    };
    let bottom = card.y + CARD_HEIGHT;
    let offset = bottom.saturating_sub(height);
    // A section's first row scrolls its heading into view too
    let top = if card.item < layout.columns { card.y.saturating_sub(1) } else { card.y };
    offset.min(top)
}

pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    sections: &[GenreSection],
    selected: usize,
    is_focused: bool,
) {
    let lens: Vec<usize> = sections.iter().map(|s| s.records.len()).collect();
    let layout = layout_grid(&lens, area.width);
    let height = area.height as usize;
    let offset = scroll_offset(&layout, selected, height);
    let visible = offset..offset + height;

    for (section, &y) in sections.iter().zip(&layout.headings) {
        if !visible.contains(&y) {
            continue;
        }
        let heading = Line::from(vec![
            Span::styled(
                section.genre.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", section.records.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let rect = Rect {
            x: area.x,
            y: area.y + (y - offset) as u16,
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(heading), rect);
    }

    for (index, slot) in layout.cards.iter().enumerate() {
        if slot.y < offset || slot.y + CARD_HEIGHT > offset + height {
            continue;
        }
        if slot.x + CARD_WIDTH > area.width {
            continue;
        }
        let record = &sections[slot.section].records[slot.item];
        let rect = Rect {
            x: area.x + slot.x,
            y: area.y + (slot.y - offset) as u16,
            width: CARD_WIDTH,
            height: CARD_HEIGHT as u16,
        };
        render_card(frame, rect, record, is_focused && index == selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, record: &SongRecord, highlighted: bool) {
    let inner_width = CARD_WIDTH.saturating_sub(2) as usize;

    let border_style = if highlighted {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let artwork = if record.artwork().is_empty() {
        Line::from(Span::styled("no artwork", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(
            "▒".repeat(inner_width),
            Style::default().fg(Color::Cyan),
        ))
    };

    let mut lines = vec![artwork];

    let title_style = if highlighted {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let mut title = wrap_lines(record.title(), inner_width, TITLE_LINES);
    title.resize(TITLE_LINES, String::new());
    lines.extend(title.into_iter().map(|l| Line::from(Span::styled(l, title_style))));

    lines.push(Line::from(Span::styled(
        truncate_string(record.artist(), inner_width),
        Style::default().fg(Color::Gray),
    )));

    let year = record
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_default();
    lines.push(Line::from(Span::styled(year, Style::default().fg(Color::DarkGray))));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_width() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(CARD_WIDTH), 1);
        assert_eq!(columns_for_width(CARD_WIDTH * 2 + CARD_GAP), 2);
        assert_eq!(columns_for_width(100), 4);
    }

    #[test]
    fn sections_stack_with_headings() {
        // 3 + 1 cards at two per row
        let layout = layout_grid(&[3, 1], CARD_WIDTH * 2 + CARD_GAP);
        assert_eq!(layout.columns, 2);
        assert_eq!(layout.headings, vec![0, 1 + 2 * CARD_HEIGHT + 1]);
        assert_eq!(layout.cards.len(), 4);
        assert_eq!(layout.cards[1].x, CARD_WIDTH + CARD_GAP);
        assert_eq!(layout.cards[2].y, 1 + CARD_HEIGHT);
        assert_eq!(layout.cards[3].section, 1);
        assert_eq!(layout.cards[3].y, layout.headings[1] + 1);
    }

    #[test]
    fn no_scroll_when_selection_fits() {
        let layout = layout_grid(&[4], CARD_WIDTH);
        assert_eq!(scroll_offset(&layout, 0, 20), 0);
        assert_eq!(scroll_offset(&layout, 1, 20), 0);
    }

    #[test]
    fn scroll_brings_selection_into_view() {
        let layout = layout_grid(&[4], CARD_WIDTH);
        let offset = scroll_offset(&layout, 3, 10);
        let card = layout.cards[3];
        assert!(card.y >= offset);
        assert!(card.y + CARD_HEIGHT <= offset + 10);
    }

    #[test]
    fn first_row_of_a_section_shows_its_heading() {
        let layout = layout_grid(&[1, 1], CARD_WIDTH);
        let offset = scroll_offset(&layout, 1, CARD_HEIGHT + 1);
        assert_eq!(offset, layout.headings[1]);
    }
}
