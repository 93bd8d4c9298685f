use titledesk::adapters::{FileCredentialsProvider, ReqwestHttpClient};
use titledesk::api::ApiClient;
use titledesk::app::{App, AppMessage};
use titledesk::config::Config;
use titledesk::session::{SessionContext, SessionStore};
use titledesk::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How often the event loop wakes up without input, to expire notices.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Set up file logging when `TITLEDESK_LOG` is set.
///
/// A TUI owns the terminal, so logs can only go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("titledesk=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Restore the terminal on panic so the panic message is readable.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("titledesk {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    let config = Config::from_env();
    init_logging(&config)?;
    tracing::info!("titledesk {} starting against {}", VERSION, config.base_url);

    setup_panic_hook();

    // Wire up the session: one context, one API client, file-backed storage.
    let context = SessionContext::new();
    let api = ApiClient::new(ReqwestHttpClient::new(), config.base_url.clone(), context);
    let provider = FileCredentialsProvider::new()
        .map_err(|e| eyre!("credential storage unavailable: {}", e))?;
    let session = Arc::new(SessionStore::new(api, provider));

    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let mut app = App::new(session, config.poll_interval, message_tx);
    app.restore_session();

    // Terminal setup.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_event_loop(&mut terminal, &mut app, message_rx).await;

    // Terminal teardown, even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop<B>(
    terminal: &mut Terminal<B>,
    app: &mut App<ReqwestHttpClient, FileCredentialsProvider>,
    mut message_rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    <B as ratatui::backend::Backend>::Error: std::marker::Send + std::marker::Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            _ = tokio::time::sleep(TICK_INTERVAL) => {
                app.expire_notice();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                        return Err(e.into());
                    }
                    // Input stream ended; nothing left to drive the UI.
                    None => return Ok(()),
                }
            }

            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
