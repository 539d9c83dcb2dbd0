use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

/// Tab 1: headline metric cards, the verdict and its supporting quote.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(7), // cards
            Constraint::Min(4),    // quote
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_cards(frame, app, chunks[1]);
    render_quote(frame, app, chunks[2]);

    let footer = Paragraph::new(Line::from(Span::styled(
        app.report.footer(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.report.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.report.subtitle(),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let colors = [Color::Cyan, Color::Yellow, Color::Magenta];
    for (i, metric) in app.report.metrics().iter().take(3).enumerate() {
        let color = colors[i % colors.len()];
        let mut lines = vec![
            Line::from(Span::styled(metric.label.as_str(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                metric.value.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(note) = &metric.note {
            lines.push(Line::from(Span::styled(
                note.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(card, cols[i]);
    }

    let verdict = Paragraph::new(vec![
        Line::from(Span::styled("Strategic Status", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            app.report.verdict().headline.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(verdict, cols[3]);
}

fn render_quote(frame: &mut Frame, app: &App, area: Rect) {
    let quote = Paragraph::new(Line::from(vec![
        Span::styled("\u{201c}", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.report.verdict().quote.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
        Span::styled("\u{201d}", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Verdict "))
    .wrap(Wrap { trim: true });
    frame.render_widget(quote, area);
}
