mod app;
mod command;
mod tabs;
mod ui;
mod widgets;

use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ci_chat::ThinkingDelay;
use ci_core::config::Config;

use crate::app::App;

struct Args {
    headless: bool,
    no_delay: bool,
    json_logs: bool,
    config: Option<PathBuf>,
}

impl Args {
    // Simple flag scan, no clap dependency.
    fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self {
            headless: args.iter().any(|a| a == "--headless"),
            no_delay: args.iter().any(|a| a == "--no-delay"),
            json_logs: args.iter().any(|a| a == "--json-logs"),
            config: args
                .iter()
                .position(|a| a == "--config")
                .and_then(|i| args.get(i + 1))
                .map(PathBuf::from),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading ~/.ci-report/config.toml")?,
    };

    init_logging(&args, &config);

    let filters = config.ui.filter_selection()?;
    let delay = if args.no_delay {
        ThinkingDelay::none()
    } else {
        ThinkingDelay::new(config.chat.thinking_delay())
    };
    let app = App::new(filters, delay);
    tracing::info!(
        headless = args.headless,
        thinking_delay_ms = delay.duration().as_millis() as u64,
        "ci-report starting"
    );

    if args.headless {
        return run_headless(app);
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(app, config.ui.tick_rate());

    restore_terminal()?;
    result
}

/// Headless output goes to stderr; the interactive screen owns the terminal,
/// so its logs go to a file.
fn init_logging(args: &Args, config: &Config) {
    let level = config.general.log_level.as_str();
    if args.headless {
        if args.json_logs {
            ci_telemetry::logging::init_logging_json("ci-report", level);
        } else {
            ci_telemetry::logging::init_logging("ci-report", level);
        }
        return;
    }

    let path = config.general.log_path();
    if let Err(e) = ci_telemetry::logging::init_logging_to_file("ci-report", level, &path) {
        eprintln!("warning: logging disabled, cannot open {}: {e}", path.display());
    }
}

/// Run the interactive TUI with the standard crossterm backend.
fn run(mut app: App, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        app.poll_replies();

        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if ct_event::poll(tick_rate)? {
            if let Event::Key(key) = ct_event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(turns = app.session.len(), "ci-report exiting");
    Ok(())
}

/// Headless mode: reads commands from stdin, one per line, and writes JSON
/// lines to stdout.
///
/// Usage: `echo '{"cmd":"ask","args":["any threat?"]}' | ci-report --headless --no-delay`
fn run_headless(mut app: App) -> Result<()> {
    emit_event(&serde_json::json!({
        "event": "started",
        "tabs": app::TAB_NAMES.len(),
        "thinking_delay_ms": app.thinking_delay().duration().as_millis() as u64,
    }));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // JSON first, then text.
        let cmd = command::parse_json_command(line).or_else(|| command::parse_command(line));

        match cmd {
            Some(cmd) => {
                let prev_tab = app.current_tab;
                let result = command::execute_command(&mut app, cmd);

                if app.current_tab != prev_tab {
                    emit_event(&serde_json::json!({
                        "event": "tab_changed",
                        "tab": app.current_tab,
                        "tab_name": app::TAB_NAMES[app.current_tab],
                    }));
                }

                match result {
                    Some(json_str) => {
                        println!("{}", json_str);
                        io::stdout().flush()?;
                    }
                    None => emit_event(&serde_json::json!({"event": "ok"})),
                }
            }
            None => {
                emit_event(&serde_json::json!({
                    "event": "error",
                    "message": format!("unknown command: {}", line),
                }));
            }
        }

        if app.should_quit {
            emit_event(&serde_json::json!({"event": "quit"}));
            break;
        }
    }

    Ok(())
}

fn emit_event(value: &serde_json::Value) {
    println!("{}", value);
    let _ = io::stdout().flush();
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
