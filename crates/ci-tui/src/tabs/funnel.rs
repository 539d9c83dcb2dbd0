use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use ci_core::report::ThreatLevel;

use crate::app::App;
use crate::tabs::format_count;
use crate::widgets::gauge_bar::render_gauge;

/// Tab 2: call-volume funnel, threat distribution and perception keywords.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(13), Constraint::Min(0)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_funnel(frame, app, top[0]);
    render_threats(frame, app, top[1]);
    render_keywords(frame, app, rows[1]);
}

fn render_funnel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Call Volume Funnel ")
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stages = app.report.funnel_stages();
    let widest = stages.first().map_or(0, |s| s.count);
    let label_width = stages.iter().map(|s| s.name.len()).max().unwrap_or(0);

    let mut constraints: Vec<Constraint> = stages.iter().map(|_| Constraint::Length(1)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, stage) in stages.iter().enumerate() {
        let fraction = if widest == 0 { 0.0 } else { stage.count as f64 / widest as f64 };
        render_gauge(
            frame,
            slots[i],
            &stage.name,
            label_width,
            fraction,
            &format_count(stage.count),
            Color::Blue,
        );
    }

    let caption = Paragraph::new(Line::from(Span::styled(
        format!(
            "Only {:.2}% of calls contain substantive Quipli discussions",
            app.report.substantive_share_pct()
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(caption, slots[stages.len() + 1]);
}

fn threat_color(level: ThreatLevel) -> Color {
    match level {
        ThreatLevel::High => Color::Red,
        ThreatLevel::Medium => Color::Yellow,
        ThreatLevel::Low => Color::Green,
    }
}

fn render_threats(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Threat Level Distribution ")
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let threats = app.report.threat_levels();
    let total: u64 = threats.iter().map(|t| t.count).sum();
    let label_width = ThreatLevel::ALL.iter().map(|l| l.label().len()).max().unwrap_or(0);

    let mut constraints: Vec<Constraint> = threats.iter().map(|_| Constraint::Length(1)).collect();
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, t) in threats.iter().enumerate() {
        let fraction = if total == 0 { 0.0 } else { t.count as f64 / total as f64 };
        render_gauge(
            frame,
            slots[i],
            t.level.label(),
            label_width,
            fraction,
            &format!("{} ({:.1}%)", t.count, fraction * 100.0),
            threat_color(t.level),
        );
    }

    let mut lines: Vec<Line> = threats
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(threat_color(t.level))),
                Span::styled(t.description.as_str(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!(
            "Only {:.1}% of identified calls show a high competitive threat",
            app.report.high_threat_share_pct()
        ),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), slots[threats.len()]);
}

fn render_keywords(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let data: Vec<(&str, u64)> = app
        .report
        .perception_keywords()
        .iter()
        .map(|k| (k.keyword.as_str(), k.frequency))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" How Prospects Perceive Quipli "),
        )
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(3)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(chart, chunks[0]);

    let insight = Paragraph::new(Line::from(vec![
        Span::styled(" Key Insight: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("Quipli is perceived as 'modern' and 'website-first'."),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(insight, chunks[1]);
}
