use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use barcart::app::App;
use barcart::config::{Config, load_config};
use barcart::error::BarcartError;
use barcart::fetch::{Fetcher, HttpLookup};
use barcart::search::SearchState;

/// Longest the event loop sleeps before checking for lookup results
const TICK: Duration = Duration::from_millis(50);

/// barcart - Search cocktails as you type
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Initial search text
    query: Option<String>,

    /// Config file (defaults to <config dir>/barcart/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Lookup endpoint, overriding the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Quiet period before a lookup, in milliseconds
    #[arg(long, value_name = "N")]
    debounce_ms: Option<u64>,

    /// Never show the loading indicator
    #[arg(long)]
    no_loading: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.lookup.endpoint = endpoint.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
        if self.no_loading {
            config.ui.show_loading = false;
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    // Validate everything before taking over the terminal
    let endpoint = config.lookup.endpoint_url()?;
    let lookup = HttpLookup::new(config.lookup.timeout())
        .map_err(|e| BarcartError::Http(e.to_string()))?;

    let mut search = SearchState::new(&config, endpoint, Fetcher::spawn(lookup));
    if let Some(query) = &args.query {
        search.set_query(query, Instant::now());
    }
    let app = App::new(search);

    let terminal = ratatui::init();
    let result = enable_pointer_and_paste().and_then(|()| run(terminal, app));

    let _ = execute!(std::io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    result
}

/// Mouse events drive hover and click; bracketed paste delivers pasted text
/// as one event instead of a burst of key presses
fn enable_pointer_and_paste() -> Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture, EnableBracketedPaste)
        .map_err(BarcartError::Io)?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.next_wakeup(Instant::now(), TICK);
        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a file in the temp dir; the terminal belongs to the TUI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("barcart-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
