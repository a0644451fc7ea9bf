//! Keybinding definitions
//!
//! The search page is mostly a text field, so its commands use keys that
//! never produce text (Enter, Tab, arrows, Ctrl combinations). The changelog
//! page is read-only and uses vim-style keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// Ctrl+C quits from anywhere
pub fn is_quit_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'c')
}

/// Ctrl+O follows the generated changelog link
pub fn is_open_link_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'o')
}

/// Ctrl+L reloads the changelog page
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'l')
}

/// Whether a key should be inserted into a text field
pub fn is_text_input(key: &KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

// =============================================================================
// Search page keys
// =============================================================================

/// Pick a suggestion / start generation
pub const SUBMIT: KeyCode = KeyCode::Enter;

/// Close the dropdown, leave the day field, or quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Move between the repository field and the day field
pub const NEXT_FIELD: KeyCode = KeyCode::Tab;
pub const PREV_FIELD: KeyCode = KeyCode::BackTab;

pub const DELETE_CHAR: KeyCode = KeyCode::Backspace;

/// Suggestion navigation (arrows only; letters are text)
pub const SUGGESTION_UP: KeyCode = KeyCode::Up;
pub const SUGGESTION_DOWN: KeyCode = KeyCode::Down;

/// Longest accepted day count input
pub const MAX_DAYS_DIGITS: usize = 4;

// =============================================================================
// Changelog page keys
// =============================================================================

/// Back to the search page
pub const BACK: KeyCode = KeyCode::Char('q');

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "^C",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_MOVE: KeyHint = KeyHint {
    key: "↑/↓",
    label: "Move",
    color: Color::Cyan,
};
pub const HINT_SELECT: KeyHint = KeyHint {
    key: "Enter",
    label: "Select",
    color: Color::Green,
};
pub const HINT_CLOSE: KeyHint = KeyHint {
    key: "Esc",
    label: "Close",
    color: Color::Yellow,
};
pub const HINT_GENERATE: KeyHint = KeyHint {
    key: "Enter",
    label: "Generate",
    color: Color::Green,
};
pub const HINT_DAYS: KeyHint = KeyHint {
    key: "Tab",
    label: "Days",
    color: Color::Magenta,
};
pub const HINT_REPOSITORY: KeyHint = KeyHint {
    key: "Tab",
    label: "Repository",
    color: Color::Magenta,
};
pub const HINT_OPEN_LINK: KeyHint = KeyHint {
    key: "^O",
    label: "Open changelog",
    color: Color::Blue,
};

pub const CHANGELOG_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Scroll",
        color: Color::Cyan,
    },
    KeyHint {
        key: "g/G",
        label: "Top/Bottom",
        color: Color::Cyan,
    },
    KeyHint {
        key: "^L",
        label: "Reload",
        color: Color::Green,
    },
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Yellow,
    },
];

/// Search page state that decides which hints apply
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchHintContext {
    pub dropdown_open: bool,
    pub has_selection: bool,
    pub editing_days: bool,
    pub has_link: bool,
}

/// Hints for the search page
pub fn search_hints(ctx: &SearchHintContext) -> Vec<KeyHint> {
    let mut hints = Vec::new();
    if ctx.dropdown_open {
        hints.extend([HINT_MOVE, HINT_SELECT, HINT_CLOSE]);
    } else if ctx.has_selection {
        hints.push(HINT_GENERATE);
        hints.push(if ctx.editing_days {
            HINT_REPOSITORY
        } else {
            HINT_DAYS
        });
    }
    if ctx.has_link {
        hints.push(HINT_OPEN_LINK);
    }
    hints.push(HINT_QUIT);
    hints
}
