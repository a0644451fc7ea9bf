//! Changelog Generator - terminal front-end
//!
//! Binary entry point for the TUI application.

use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use changelog_tui::api::{BackendClient, Clients, GitHubSearch};
use changelog_tui::app::{App, Worker};
use changelog_tui::config::Cli;
use changelog_tui::{logging, ui};

/// Interval between idle ticks (debounce and response polling)
const TICK: Duration = Duration::from_millis(50);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let settings = Cli::parse_args().into_settings()?;
    logging::init(&settings.log_file, settings.debug)?;
    info!(?settings, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start async runtime")?;

    let search = GitHubSearch::new(&settings.search_api_url, settings.github_token.clone())?;
    let backend = BackendClient::new(&settings.backend_url)?;
    let (worker, responses) = Worker::new(runtime.handle().clone(), Clients::new(search, backend));
    let app = App::new(settings, worker, responses);

    let terminal = ratatui::init();
    if let Err(e) = ui::set_terminal_title() {
        warn!("failed to set terminal title: {}", e);
    }
    let result = run(terminal, app);
    ratatui::restore();

    runtime.shutdown_background();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }
    info!("exiting");
    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a short timeout so debounced searches fire and responses are
/// applied even while no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(TICK)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.on_tick(Instant::now());
    Ok(())
}
