use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use ci_core::report::Level;

use crate::app::App;

fn level_color(level: Level) -> Color {
    match level {
        Level::Low => Color::Green,
        Level::Medium => Color::Yellow,
        Level::High => Color::Red,
    }
}

/// Tab 5: ranked recommendations with impact/effort and the selected body.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = app
        .report
        .recommendations()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let style = if i == app.selected_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {}. ", r.rank),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(r.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(vec![
                    Span::raw("    Impact: "),
                    Span::styled(r.impact.label(), Style::default().fg(level_color(r.impact))),
                    Span::raw(" | Effort: "),
                    Span::styled(r.effort.label(), Style::default().fg(level_color(r.effort))),
                ]),
                Line::from(""),
            ])
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Strategic Recommendations "),
    );
    frame.render_widget(list, chunks[0]);

    let Some(rec) = app.report.recommendations().get(app.selected_index) else {
        return;
    };
    let detail = Paragraph::new(vec![
        Line::from(Span::styled(
            rec.title.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(rec.body.as_str()),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" #{} ", rec.rank)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(detail, chunks[1]);
}
