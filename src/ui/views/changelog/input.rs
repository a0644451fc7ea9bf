//! Input handling for ChangelogView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{ChangelogAction, ChangelogView};

/// Lines moved by PageUp/PageDown
const PAGE: usize = 10;

impl ChangelogView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> ChangelogAction {
        if keys::is_refresh_key(&key) {
            return ChangelogAction::Reload;
        }

        match key.code {
            k if keys::is_move_down(k) => {
                self.scroll_down(1);
                ChangelogAction::None
            }
            k if keys::is_move_up(k) => {
                self.scroll_up(1);
                ChangelogAction::None
            }
            keys::PAGE_DOWN => {
                self.scroll_down(PAGE);
                ChangelogAction::None
            }
            keys::PAGE_UP => {
                self.scroll_up(PAGE);
                ChangelogAction::None
            }
            keys::GO_TOP => {
                self.scroll_to_top();
                ChangelogAction::None
            }
            keys::GO_BOTTOM => {
                self.scroll_to_bottom();
                ChangelogAction::None
            }
            keys::BACK | keys::ESC => ChangelogAction::Back,
            _ => ChangelogAction::None,
        }
    }
}
