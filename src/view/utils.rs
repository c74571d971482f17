//! Utility functions for rendering UI components

const ELLIPSIS: char = '…';

/// Cut `s` to at most `max_width` characters, marking the cut with an ellipsis
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() > max_width {
        let mut truncated: String = s.chars().take(max_width - 1).collect();
        truncated.push(ELLIPSIS);
        truncated
    } else {
        s.to_string()
    }
}

/// Word-wrap `s` into at most `max_lines` lines of `width` characters.
///
/// Words longer than a line are split. When the text does not fit, the last
/// line ends with an ellipsis.
pub fn wrap_lines(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let used = current.chars().count();
            let needed = if used == 0 { word.len() } else { used + 1 + word.len() };
            if needed <= width {
                if used > 0 {
                    current.push(' ');
                }
                current.extend(word.iter());
                break;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            // Word alone is wider than a line
            let rest = word.split_off(width);
            lines.push(word.iter().collect());
            word = rest;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(width.saturating_sub(1)).collect();
            *last = format!("{}{}", kept.trim_end(), ELLIPSIS);
        }
    }
    lines
}
