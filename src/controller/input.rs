//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let mut model = self.model.lock().await;

        // Quit works from every section
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            model.set_should_quit(true);
            return;
        }

        match key.code {
            KeyCode::Tab => {
                model.cycle_section_forward();
                return;
            }
            KeyCode::BackTab => {
                model.cycle_section_backward();
                return;
            }
            _ => {}
        }

        match model.active_section() {
            ActiveSection::SearchBox => match key.code {
                KeyCode::Enter => {
                    let query = model.query().to_string();
                    self.submit_search(&mut model, &query);
                }
                KeyCode::Esc => model.update_search_query(String::new()),
                KeyCode::Backspace => model.backspace_search(),
                KeyCode::Char(c) => model.append_to_search(c),
                _ => {}
            },
            ActiveSection::SearchButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let query = model.query().to_string();
                    self.submit_search(&mut model, &query);
                }
                KeyCode::Esc => model.set_active_section(ActiveSection::SearchBox),
                _ => {}
            },
            ActiveSection::Results => match key.code {
                KeyCode::Up => model.move_selection_up(),
                KeyCode::Down => model.move_selection_down(),
                KeyCode::Left => model.move_selection_left(),
                KeyCode::Right => model.move_selection_right(),
                KeyCode::Char('/') | KeyCode::Esc => {
                    model.set_active_section(ActiveSection::SearchBox)
                }
                KeyCode::Char('q') => model.set_should_quit(true),
                _ => {}
            },
        }
    }
}
