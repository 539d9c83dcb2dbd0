use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use ci_core::filters::CallType;

use crate::app::App;

/// Left-hand "Report Controls" panel: report metadata and the filter widgets.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let rule = Line::from(Span::styled(
        "─".repeat(area.width.saturating_sub(2) as usize),
        dim,
    ));

    let mut lines = vec![
        Line::from(vec![Span::styled("Period: ", bold), Span::raw(app.report.period())]),
        Line::from(vec![Span::styled("Source: ", bold), Span::raw(app.report.source())]),
        rule.clone(),
        Line::from(Span::styled(
            "Data Filters",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Region ", bold), Span::styled("[g]", dim)]),
        Line::from(Span::styled(
            format!("  < {} >", app.filters.region.label()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Call Types", bold)]),
    ];

    for (call_type, key) in [(CallType::Sales, "s"), (CallType::InternalTraining, "t")] {
        let mark = if app.filters.is_selected(call_type) { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {mark} "), Style::default().fg(Color::Green)),
            Span::raw(call_type.label()),
            Span::styled(format!(" [{key}]"), dim),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Viewing data for: "),
        Span::styled(app.filters.region.label(), bold),
    ]));
    lines.push(rule);
    lines.push(Line::from(Span::styled(app.report.vendor_caption(), dim)));

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Report Controls ")
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, area);
}
