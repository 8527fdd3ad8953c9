use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use soko::app::App;
use soko::cli::Args;
use soko::config;
use soko::suggest::{SuggestClient, spawn_worker};

/// How long the event loop waits for input before running a tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    init_logging();

    let args = Args::parse();

    let mut config = config::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint.base_url = endpoint;
    }

    // Channels between the UI thread and the suggestion fetch worker
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(
        SuggestClient::new(&config.endpoint.base_url),
        request_rx,
        response_tx,
    );

    let mut app = App::new(&config);
    app.suggest.connect(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let _ = execute!(std::io::stdout(), EnableMouseCapture);

    // Run the application
    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// Set up file-backed logging in debug builds
///
/// Logs go to a file because stderr belongs to the alternate screen while
/// the TUI is running. Release builds compile this to a no-op.
fn init_logging() {
    #[cfg(debug_assertions)]
    {
        if let Ok(file) = std::fs::File::create("soko.log") {
            let _ = env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .try_init();
        }
    }
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle input, then advance timers and drain worker responses
        app.handle_events(POLL_INTERVAL)?;
        app.on_tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
