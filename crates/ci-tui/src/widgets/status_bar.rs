use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const DASHBOARD_HINTS: &[(&str, &str)] = &[
    ("[Tab]", " Next  "),
    ("[g/s/t]", " Filters  "),
    ("[?]", " Help  "),
    ("[q]", " Quit"),
];

// Letters are typed into the question on the Ask tab.
const ASK_HINTS: &[(&str, &str)] = &[
    ("[Enter]", " Send  "),
    ("[Esc]", " Cancel  "),
    ("[Tab]", " Next  "),
    ("[F1]", " Help"),
];

/// Render the bottom status bar. `ask_mode` swaps in the Ask tab's keys and
/// `thinking` adds a marker while a chat reply is pending.
pub fn render(frame: &mut Frame, area: Rect, ask_mode: bool, thinking: bool) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");

    let hints = if ask_mode { ASK_HINTS } else { DASHBOARD_HINTS };
    let mut left: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(*label),
            ]
        })
        .collect();
    if thinking {
        left.push(Span::styled("  thinking...", Style::default().fg(Color::Cyan)));
    }

    // Ratatui has no split alignment within one Paragraph, so pad the middle.
    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let right_text = format!("{}", now);
    let total_width = area.width as usize;
    let padding = if total_width > left_len + right_text.len() {
        total_width - left_len - right_text.len()
    } else {
        1
    };

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right_text, Style::default().fg(Color::Gray)));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(bar, area);
}
