//! Pure rendering of the greeting screen.
//!
//! Everything here is a deterministic function of the current
//! [`DisplayState`]; no widget reads anything else.

use crate::ui::footer::Footer;
use crate::ui::greeting::DisplayState;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render the body panel for one display state.
///
/// Three mutually exclusive modes: idle hint, loaded message, error
/// description.
pub fn greeting_panel(state: &DisplayState) -> Paragraph<'static> {
    let (title, line) = match state {
        DisplayState::Idle => (
            "Greeting",
            Line::styled(
                "Press f to fetch a greeting".to_string(),
                Style::default().fg(MUTED_TEXT),
            ),
        ),
        DisplayState::Loaded(message) => (
            "Greeting",
            Line::styled(message.clone(), Style::default().fg(STATUS_OK)),
        ),
        DisplayState::Failed(description) => (
            "Error",
            Line::styled(description.clone(), Style::default().fg(STATUS_ERROR)),
        ),
    };

    Paragraph::new(line).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Line::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Compose the full frame: header chrome, greeting panel, footer hints.
pub fn draw(frame: &mut Frame<'_>, state: &DisplayState) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(greeting_panel(state), body);
    frame.render_widget(Footer::new().widget(footer), footer);
}
