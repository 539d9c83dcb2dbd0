use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::app::App;

/// Tab 3: why prospects did not move forward, in authored order.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_chart(frame, app, chunks[0]);
    render_details(frame, app, chunks[1]);
}

/// Columns a labelled bar needs beyond its label: the label gap plus room
/// for the bar and its value.
const MIN_BAR_COLUMNS: u16 = 8;

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Deal Blocker Analysis ");
    let inner = block.inner(area);

    let reasons = app.report.blocker_reasons();
    let longest = reasons
        .iter()
        .map(|b| Line::from(b.reason.as_str()).width())
        .max()
        .unwrap_or(0);
    // The detail list beside the chart names every reason, so the chart can
    // drop its labels when they do not fit.
    let labelled = labels_fit(inner.width, longest);

    let bars: Vec<Bar> = reasons
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let style = if i == app.selected_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Red)
            };
            let bar = Bar::default().value(b.count).style(style);
            if labelled {
                bar.label(Line::from(b.reason.as_str()))
            } else {
                bar
            }
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

/// Whether bar labels `longest` columns wide leave room for the bars in an
/// `inner_width`-column chart.
fn labels_fit(inner_width: u16, longest: usize) -> bool {
    let longest = u16::try_from(longest).unwrap_or(u16::MAX);
    inner_width >= longest.saturating_add(MIN_BAR_COLUMNS)
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .report
        .blocker_reasons()
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let style = if i == app.selected_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!(" {:>3} ", b.count),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(b.reason.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ])];
            if let Some(detail) = &b.detail {
                lines.push(Line::from(Span::styled(
                    format!("      {}", detail),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top Reasons for Not Moving Forward "),
    );
    frame.render_widget(list, area);
}
