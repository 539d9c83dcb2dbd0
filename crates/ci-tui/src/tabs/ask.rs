use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use ci_chat::Role;

use crate::app::App;

/// Tab 6: the scripted assistant transcript and the input line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // transcript
            Constraint::Length(1), // notice / thinking
            Constraint::Length(3), // input
        ])
        .split(area);

    render_transcript(frame, app, chunks[0]);
    render_notice(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ask the Report ")
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for turn in app.session.turns() {
        let (who, color) = match turn.role {
            Role::User => ("You", Color::Green),
            Role::Assistant => ("Assistant", Color::Cyan),
        };
        lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.extend(turn.content.split('\n').map(|l| Line::from(bold_spans(l))));
        lines.push(Line::from(""));
    }

    let transcript = Paragraph::new(lines).wrap(Wrap { trim: true });
    let offset = bottom_offset(&transcript, inner);
    frame.render_widget(transcript.scroll((offset, 0)), inner);
}

/// Scroll offset that keeps the last wrapped row of `paragraph` in view.
fn bottom_offset(paragraph: &Paragraph, area: Rect) -> u16 {
    let rows = paragraph.line_count(area.width);
    let hidden = rows.saturating_sub(usize::from(area.height));
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.is_thinking() {
        Line::from(Span::styled(
            " Thinking... (Esc to cancel)",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if let Some(notice) = &app.notice {
        Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ask a question about the report [Enter] ");
    let inner = block.inner(area);

    // Show the tail of long input so the cursor stays visible.
    let room = inner.width.saturating_sub(3) as usize;
    let mut shown: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in app.input.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        shown.push(ch);
    }
    let shown: String = shown.into_iter().rev().collect();

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::raw(shown),
    ]))
    .block(block);
    frame.render_widget(input, area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + (2 + used as u16).min(inner.width - 1);
        frame.set_cursor_position((x, inner.y));
    }
}

/// Split `text` on `**` markers into alternating plain and bold spans.
/// An unmatched trailing marker leaves the rest of the text bold.
pub fn bold_spans(text: &str) -> Vec<Span<'_>> {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            if i % 2 == 1 {
                Span::styled(part, Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::raw(part)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs<'a>(spans: &'a [Span<'a>]) -> Vec<(&'a str, bool)> {
        spans
            .iter()
            .map(|s| (s.content.as_ref(), s.style.add_modifier.contains(Modifier::BOLD)))
            .collect()
    }

    #[test]
    fn bold_markers_alternate() {
        let spans = bold_spans("a **b** c");
        assert_eq!(runs(&spans), [("a ", false), ("b", true), (" c", false)]);
    }

    #[test]
    fn leading_bold_and_unclosed_marker() {
        let spans = bold_spans("**x** y **z");
        assert_eq!(runs(&spans), [("x", true), (" y ", false), ("z", true)]);
    }

    #[test]
    fn punctuation_after_bold_stays_plain() {
        let spans = bold_spans("total of **~25,000 calls**. Of");
        assert_eq!(
            runs(&spans),
            [("total of ", false), ("~25,000 calls", true), (". Of", false)]
        );
    }

    #[test]
    fn scrolls_only_when_wrapped_rows_overflow() {
        let text = "the quick brown fox jumps over the lazy dog";
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });

        assert_eq!(bottom_offset(&paragraph, Rect::new(0, 0, 80, 5)), 0);
        // Five rows at width 10, three visible.
        assert_eq!(paragraph.line_count(10), 5);
        assert_eq!(bottom_offset(&paragraph, Rect::new(0, 0, 10, 3)), 2);
        assert_eq!(bottom_offset(&paragraph, Rect::new(0, 0, 0, 3)), 0);
    }
}
