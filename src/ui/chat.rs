use std::ops::Range;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::chat_message::ChatMessage;

/// Draws the conversation, pinned to the newest message unless scrolled up.
pub fn draw_messages(f: &mut Frame<'_>, area: Rect, app: &App) {
    let lines = message_lines(app, area.width);
    let window = visible_window(lines.len(), area.height, app.scroll);
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();

    f.render_widget(Paragraph::new(visible), area);
}

/// Rows of the rendered conversation that fit in `height`, `scroll` lines up
/// from the bottom.
fn visible_window(total: usize, height: u16, scroll: u16) -> Range<usize> {
    let height = usize::from(height);
    let max_scroll = total.saturating_sub(height);
    let top = max_scroll - usize::from(scroll).min(max_scroll);
    top..(top + height).min(total)
}

pub fn message_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let focused = app.focused();
    let mut lines = Vec::new();
    for (idx, message) in app.conversation.messages().iter().enumerate() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        let focus = focused
            .as_ref()
            .filter(|(owner, _)| *owner == idx)
            .map(|(_, action)| action);
        lines.extend(
            ChatMessage::new(message)
                .focus(focus)
                .typing_frame(app.typing_frame)
                .render(width),
        );
    }
    lines
}

pub fn draw_input(f: &mut Frame<'_>, area: Rect, app: &App) {
    if area.height < 3 {
        return;
    }

    let separator = "─".repeat(area.width as usize);
    let separator_style = Style::default().fg(Color::DarkGray);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator.as_str(), separator_style))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let prefix = "→ ";
    let visible_width = area.width.saturating_sub(2);
    let tail = visible_tail(&app.input, usize::from(visible_width));
    let input = if app.input.is_empty() {
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::DarkGray)),
            Span::styled("Type a message...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::DarkGray)),
            Span::styled(tail, Style::default().fg(Color::White)),
        ])
    };

    f.render_widget(
        Paragraph::new(input),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator.as_str(), separator_style))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    let text_width = u16::try_from(tail.width()).unwrap_or(u16::MAX);
    let cursor_x = area
        .x
        .saturating_add(2)
        .saturating_add(text_width.min(visible_width))
        .min(area.right().saturating_sub(1));
    f.set_cursor_position((cursor_x, area.y + 1));
}

/// The end of the input that fits in `width` columns.
fn visible_tail(input: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = input.len();
    for (idx, c) in input.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = idx;
    }
    &input[start..]
}
