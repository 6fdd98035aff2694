use anyhow::{Context, Result};
use clap::Parser;
use common::{GameConfig, GameState};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

use terminal::app::{App, AppCommand};

const FRAME_POLL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "snake-terminal", about = "Play snake in the terminal")]
struct Args {
    /// JSON game config; missing fields use the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u32>,

    /// Seed for apple placement, defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            GameConfig::from_json_str(&json)
                .with_context(|| format!("Invalid config file: {:?}", path))?
        }
        None => GameConfig::default(),
    };

    if let Some(tick_ms) = args.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the alternate screen; redirect with 2>file
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });
    info!(seed, tick_ms = config.tick_interval_ms, "Starting snake");
    let game = GameState::new(config, seed)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    let game = app.view.game();
    println!(
        "Final score: {} (length {})",
        game.score(),
        game.snake().len()
    );

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_update = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_update);
        last_update = now;

        app.update(dt);

        terminal.draw(|f| app.render(f))?;

        if event::poll(FRAME_POLL)? {
            if let Event::Key(key) = event::read()? {
                if let Some(AppCommand::Quit) = app.handle_input(key) {
                    return Ok(());
                }
            }
        }
    }
}
