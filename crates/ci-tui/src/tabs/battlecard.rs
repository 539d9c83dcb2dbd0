use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use ci_core::report::PositioningPoint;

use crate::app::App;

/// Tab 4: where we win, where we need to improve, attack and defend table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(9),
            Constraint::Length(6),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_points(frame, top[0], " Where POR Wins ", app.report.wins(), Color::Green);
    render_points(
        frame,
        top[1],
        " Where We Need to Improve ",
        app.report.improvements(),
        Color::Red,
    );
    render_table(frame, app, chunks[1]);
    render_selected(frame, app, chunks[2]);
}

fn render_points(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[PositioningPoint],
    color: Color,
) {
    let lines: Vec<Line> = points
        .iter()
        .map(|p| {
            Line::from(vec![
                Span::styled("\u{2022} ", Style::default().fg(color)),
                Span::styled(
                    format!("{}: ", p.topic),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(p.detail.as_str()),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Area"),
        Cell::from("Quipli Weakness"),
        Cell::from("POR Counter-Position"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .report
        .battlecard_rows()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let row = Row::new(vec![
                Cell::from(r.area.as_str()),
                Cell::from(r.counterpart_weakness.as_str()),
                Cell::from(r.counter_position.as_str()),
            ]);
            if i == app.selected_index {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Percentage(40),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Attack & Defend Strategies "),
        );
    frame.render_widget(table, area);
}

fn render_selected(frame: &mut Frame, app: &App, area: Rect) {
    let Some(row) = app.report.battlecard_rows().get(app.selected_index) else {
        return;
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Weakness: ", Style::default().fg(Color::Red)),
            Span::raw(row.counterpart_weakness.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Counter:  ", Style::default().fg(Color::Green)),
            Span::raw(row.counter_position.as_str()),
        ]),
    ];
    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", row.area)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, area);
}
