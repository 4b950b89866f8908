use crate::app::Action;
use crate::constants::{DOWNLOAD_BUTTON_LABEL, READ_RECEIPT, TYPING_DOTS};
use crate::links::{self, Segment};
use crate::models::{DeliveryStatus, Message};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::{wrap, Options, WordSeparator, WordSplitter};

const USER_COLOR: Color = Color::Rgb(220, 248, 198);
const BOT_COLOR: Color = Color::Rgb(236, 236, 236);
const LINK_COLOR: Color = Color::Rgb(83, 189, 235);
const READ_COLOR: Color = Color::Rgb(59, 130, 246);
const BUTTON_COLOR: Color = Color::Rgb(7, 94, 84);

/// Turns one message into bubble lines for the chat pane.
#[derive(Debug, Clone)]
pub struct ChatMessage<'a> {
    message: &'a Message,
    focus: Option<&'a Action>,
    typing_frame: usize,
}

impl<'a> ChatMessage<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            message,
            focus: None,
            typing_frame: 0,
        }
    }

    /// The focused action, if it belongs to this message.
    pub fn focus(mut self, focus: Option<&'a Action>) -> Self {
        self.focus = focus;
        self
    }

    pub fn typing_frame(mut self, frame: usize) -> Self {
        self.typing_frame = frame;
        self
    }

    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.get_base_style();

        self.render_header(&mut lines, base_style);

        if self.message.is_typing {
            let dots = TYPING_DOTS[self.typing_frame % TYPING_DOTS.len()];
            lines.push(self.bubble_line(vec![Span::styled(dots.to_string(), base_style)], base_style));
        } else {
            self.render_content(&mut lines, width, base_style);
            self.render_download_button(&mut lines, base_style);
        }

        self.render_footer(&mut lines, base_style);

        lines
            .into_iter()
            .map(|line| line.alignment(self.alignment()))
            .collect()
    }

    fn alignment(&self) -> Alignment {
        if self.message.is_from_user() {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    fn get_base_style(&self) -> Style {
        let style = Style::default().fg(if self.message.is_from_user() {
            USER_COLOR
        } else {
            BOT_COLOR
        });

        if self.message.is_typing {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    fn bubble_line(&self, mut spans: Vec<Span<'static>>, style: Style) -> Line<'static> {
        if self.message.is_from_user() {
            spans.push(Span::styled(" │".to_string(), style));
        } else {
            spans.insert(0, Span::styled("│ ".to_string(), style));
        }
        Line::from(spans)
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let corner = if self.message.is_from_user() { "─╮" } else { "╭─" };
        lines.push(Line::from(Span::styled(corner.to_string(), style)));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, width: u16, style: Style) {
        // Bubbles take at most 70% of the pane, minus the border.
        let wrap_width = ((width as usize) * 7 / 10).saturating_sub(2).max(8);
        // Break only at spaces so a URL or email stays one token, even if it overflows.
        let options = Options::new(wrap_width)
            .break_words(false)
            .word_separator(WordSeparator::AsciiSpace)
            .word_splitter(WordSplitter::NoHyphenation);

        for source_line in self.message.text.split('\n') {
            if source_line.is_empty() {
                lines.push(self.bubble_line(Vec::new(), style));
                continue;
            }
            for wrapped_line in wrap(source_line, &options) {
                let spans = links::segment_line(&wrapped_line)
                    .into_iter()
                    .map(|segment| self.segment_span(segment, style))
                    .collect();
                lines.push(self.bubble_line(spans, style));
            }
        }
    }

    fn segment_span(&self, segment: Segment<'_>, style: Style) -> Span<'static> {
        let Some(href) = segment.href() else {
            return Span::styled(segment.as_str().to_string(), style);
        };

        let mut link_style = Style::default()
            .fg(LINK_COLOR)
            .add_modifier(Modifier::UNDERLINED);
        if self.focus == Some(&Action::Open(href)) {
            link_style = link_style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(segment.as_str().to_string(), link_style)
    }

    fn render_download_button(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        if !self.message.has_download_action {
            return;
        }

        let mut button_style = Style::default()
            .fg(Color::White)
            .bg(BUTTON_COLOR)
            .add_modifier(Modifier::BOLD);
        if self.focus == Some(&Action::Download) {
            button_style = button_style.add_modifier(Modifier::REVERSED);
        }

        lines.push(self.bubble_line(
            vec![Span::styled(DOWNLOAD_BUTTON_LABEL.to_string(), button_style)],
            style,
        ));
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let mut spans = Vec::new();
        if !self.message.is_from_user() {
            spans.push(Span::styled("╰─ ".to_string(), style));
        }
        if !self.message.timestamp.is_empty() {
            spans.push(Span::styled(
                self.message.timestamp.clone(),
                style.add_modifier(Modifier::DIM),
            ));
        }
        if let Some(status) = self.message.delivery_status {
            let (icon, color) = match status {
                DeliveryStatus::Sent => ("✓", Color::DarkGray),
                DeliveryStatus::Delivered => (READ_RECEIPT, Color::DarkGray),
                DeliveryStatus::Read => (READ_RECEIPT, READ_COLOR),
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(icon.to_string(), Style::default().fg(color)));
        }
        if self.message.is_from_user() {
            spans.push(Span::styled(" ─╯".to_string(), style));
        }
        lines.push(Line::from(spans));
    }
}
