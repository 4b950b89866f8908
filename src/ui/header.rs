use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::PROFILE_NAME;

const HEADER_BG: Color = Color::Rgb(7, 94, 84);

/// Name and presence, like the top bar of a messaging app.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let presence = if app.status_indicator.is_typing() {
        "typing..."
    } else {
        "online"
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", PROFILE_NAME),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", presence),
            Style::default().fg(Color::Rgb(200, 230, 225)),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(HEADER_BG)),
    );

    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn presence_row(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal.draw(|f| draw_header(f, f.area(), app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_presence_follows_typing_indicator() {
        let mut app = App::new(Config::default());
        assert_eq!(presence_row(&app).trim(), "online");

        app.set_replying(true);
        assert_eq!(presence_row(&app).trim(), "typing...");

        app.set_replying(false);
        assert_eq!(presence_row(&app).trim(), "online");
    }
}
