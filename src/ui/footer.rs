use crate::app::{App, AppState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = match app.state {
        AppState::Chat if app.focused_action.is_some() => {
            "Ctrl+O to open the highlighted item, Tab/Shift+Tab to move, Esc to quit."
        }
        AppState::Chat => "Enter to send, Tab to select links, PgUp/PgDn to scroll, Esc to quit.",
        AppState::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        AppState::Quit => "",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
