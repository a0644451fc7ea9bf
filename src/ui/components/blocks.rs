//! Block components for UI rendering

use ratatui::{
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders},
};

use crate::ui::theme;

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered block whose title is followed by an optional notification
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let block = bordered_block(title);
    match notification {
        Some(line) => block.title(line),
        None => block,
    }
}

/// Input field block, highlighted while it has focus
pub fn focused_block<'a>(title: Line<'a>, focused: bool) -> Block<'a> {
    let border = if focused {
        theme::FOCUSED_BORDER
    } else {
        theme::UNFOCUSED_BORDER
    };
    let title = if focused { title.bold() } else { title };
    bordered_block(title).border_style(Style::default().fg(border))
}
