use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Default)]
pub struct StatusIndicator {
    typing: bool,
    status_text: String,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status_text = status.into();
    }

    pub fn status(&self) -> &str {
        &self.status_text
    }

    pub fn clear_status(&mut self) {
        self.status_text.clear();
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn line(&self) -> Line<'_> {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let typing_indicator = if self.typing {
            spinner_frames[self.spinner_idx % spinner_frames.len()]
        } else {
            " "
        };

        // Notices win over the typing hint
        let status_text = if !self.status_text.is_empty() {
            self.status_text.as_str()
        } else if self.typing {
            "typing..."
        } else {
            ""
        };

        let status_color = if !self.status_text.is_empty() {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        Line::from(vec![
            Span::styled(typing_indicator, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(self.line()).alignment(Alignment::Left),
            area,
        );
    }
}
