use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Key column, description column.
type Binding = (&'static str, &'static str);

pub const DASHBOARD_KEYS: &[Binding] = &[
    ("1-6", "Jump to tab"),
    ("Tab / Shift-Tab", "Next / previous tab"),
    ("j / Down", "Move down in list"),
    ("k / Up", "Move up in list"),
    ("g", "Cycle region filter"),
    ("s", "Toggle Sales calls"),
    ("t", "Toggle Internal/Training calls"),
    ("? / F1", "Toggle this help"),
    ("q", "Quit"),
    ("Ctrl-c", "Force quit"),
];

pub const ASK_KEYS: &[Binding] = &[
    ("Enter", "Send question"),
    ("Esc", "Cancel reply, else clear input"),
    ("Backspace", "Delete last character"),
    ("F1", "Help (? is typed as text)"),
];

/// Render the keybinding overlay centered over the whole frame.
pub fn render(frame: &mut Frame) {
    let area = centered(frame.area(), 64, 24);
    frame.render_widget(Clear, area);

    let mut lines = section("Keybindings", DASHBOARD_KEYS);
    lines.push(Line::from(""));
    lines.extend(section("Ask tab", ASK_KEYS));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(modal, area);
}

fn section(title: &'static str, bindings: &[Binding]) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(format!("  {title}"), heading))];
    lines.extend(bindings.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<18}"), key_style),
            Span::raw(*desc),
        ])
    }));
    lines
}

/// A `width` x `height` rect centered in `parent`, shrunk to fit.
fn centered(parent: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(parent.height))])
        .flex(Flex::Center)
        .areas(parent);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(parent.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
