use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders a one-line horizontal bar with a padded label and a trailing value.
///
/// Example output: ` Sales Calls          [█░░░░░░░░░░░] 63 `
///
/// `fraction` is clamped to `0.0..=1.0`. A non-zero fraction always fills at
/// least one cell so tiny values stay visible next to large ones.
pub fn render_gauge(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    label_width: usize,
    fraction: f64,
    value_text: &str,
    color: Color,
) {
    if area.height == 0 {
        return;
    }
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };

    let label_display = format!(" {:<width$}", label, width = label_width);
    let value_display = format!(" {}", value_text);
    // " label" + " [" + "]" + " value"
    let overhead = label_display.chars().count() + 2 + 1 + value_display.chars().count();
    let bar_width = (area.width as usize).saturating_sub(overhead);

    if bar_width == 0 {
        return;
    }

    let mut filled_count = (bar_width as f64 * fraction).round() as usize;
    if fraction > 0.0 && filled_count == 0 {
        filled_count = 1;
    }
    let filled_count = filled_count.min(bar_width);
    let empty_count = bar_width - filled_count;

    let filled: String = "\u{2588}".repeat(filled_count); // █
    let empty: String = "\u{2591}".repeat(empty_count); // ░

    let line = Line::from(vec![
        Span::styled(label_display, Style::default().fg(Color::White)),
        Span::raw(" ["),
        Span::styled(filled, Style::default().fg(color)),
        Span::styled(empty, Style::default().fg(Color::DarkGray)),
        Span::raw("]"),
        Span::styled(value_display, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
