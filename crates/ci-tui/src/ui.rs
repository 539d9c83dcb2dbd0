use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::app::{App, ASK_TAB, TAB_NAMES};
use crate::tabs;
use crate::widgets::{help_modal, sidebar, status_bar};

/// Width of the "Report Controls" column.
pub const SIDEBAR_WIDTH: u16 = 30;

/// Master render function: header tabs, sidebar plus content, status bar.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tab bar
            Constraint::Min(0),    // body
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    sidebar::render(frame, app, body[0]);
    render_content(frame, app, body[1]);
    status_bar::render(
        frame,
        chunks[2],
        app.current_tab == ASK_TAB,
        app.is_thinking(),
    );

    if app.show_help {
        help_modal::render(frame);
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = TAB_NAMES
        .iter()
        .enumerate()
        .map(|(i, t)| {
            Line::from(vec![
                Span::styled(
                    format!("{}", i + 1),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(":"),
                Span::raw(*t),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(" ci-report ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(app.current_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" | "));

    frame.render_widget(tabs, area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_tab {
        0 => tabs::overview::render(frame, app, area),
        1 => tabs::funnel::render(frame, app, area),
        2 => tabs::blockers::render(frame, app, area),
        3 => tabs::battlecard::render(frame, app, area),
        4 => tabs::recommendations::render(frame, app, area),
        5 => tabs::ask::render(frame, app, area),
        _ => {}
    }
}
