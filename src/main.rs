use std::io;
use std::panic;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use grid_snake::config::{
    ConfigError, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, GameConfig,
    GridSize, Theme, theme_by_name,
};
use grid_snake::driver::Ticker;
use grid_snake::game::{GameState, Phase};
use grid_snake::input::{self, GameInput};
use grid_snake::renderer;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// How long one loop iteration waits for input; doubles as frame pacing.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(15);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Milliseconds between movement ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the start screen and begin running immediately.
    #[arg(long)]
    autostart: bool,

    /// Color theme: classic, ocean, or neon.
    #[arg(long, default_value = "classic")]
    theme: String,
}

/// Validated runtime settings derived from the CLI.
struct Settings {
    config: GameConfig,
    seed: Option<u64>,
    tick_interval: Duration,
    theme: &'static Theme,
}

impl Settings {
    fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let grid = GridSize {
            width: cli.width,
            height: cli.height,
        };
        let config = GameConfig::new(grid, cli.autostart)?;

        if cli.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        let theme = theme_by_name(&cli.theme).ok_or_else(|| ConfigError::UnknownTheme {
            name: cli.theme.clone(),
        })?;

        Ok(Self {
            config,
            seed: cli.seed,
            tick_interval: Duration::from_millis(cli.tick_ms),
            theme,
        })
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("{error}");
            process::exit(2);
        }
    };

    install_panic_hook();

    let result = run(&settings);
    cleanup_terminal()?;
    result
}

fn run(settings: &Settings) -> io::Result<()> {
    let mut terminal = setup_terminal()?;

    let mut state = match settings.seed {
        Some(seed) => GameState::new_with_seed(settings.config, seed),
        None => GameState::new(settings.config),
    };

    let mut ticker = Ticker::new(settings.tick_interval);
    if state.phase == Phase::Running {
        ticker.start(Instant::now());
    }

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, settings.theme))?;

        if let Some(game_input) = input::poll_input(INPUT_POLL_TIMEOUT)? {
            if game_input == GameInput::Quit {
                break;
            }

            handle_input(&mut state, &mut ticker, settings, game_input);
        }

        if ticker.poll(Instant::now()) {
            state.tick();
            // The ticker and the engine gate independently; stopping the
            // ticker on a terminal phase just avoids useless polls.
            if matches!(state.phase, Phase::Over | Phase::Won) {
                ticker.cancel();
            }
        }
    }

    Ok(())
}

fn handle_input(state: &mut GameState, ticker: &mut Ticker, settings: &Settings, input: GameInput) {
    match input {
        GameInput::Heading(heading) => state.set_heading(heading),
        GameInput::Confirm if state.phase == Phase::Ready => {
            state.start();
            ticker.start(Instant::now());
        }
        GameInput::Confirm if matches!(state.phase, Phase::Over | Phase::Won) => {
            let start_running = settings.config.start_running;
            state.reset(start_running);
            if start_running {
                ticker.start(Instant::now());
            } else {
                ticker.cancel();
            }
        }
        GameInput::Pause if state.phase == Phase::Running => {
            state.pause();
            ticker.cancel();
        }
        GameInput::Pause if state.phase == Phase::Paused => {
            state.resume();
            ticker.start(Instant::now());
        }
        GameInput::Confirm | GameInput::Pause | GameInput::Quit => {}
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(error);
    }

    Terminal::new(CrosstermBackend::new(stdout))
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);

        default_hook(panic_info);
    }));
}
