use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use friend_quest::build_info;
use friend_quest::config::{parse_args, Command, GameConfig, USAGE};
use friend_quest::core::constants::TICK_INTERVAL_MS;
use friend_quest::core::game_state::GameState;
use friend_quest::core::tick::{apply_tick_events, game_tick};
use friend_quest::input::{map_key, map_mouse, InputContext, Intent};
use friend_quest::ui::{draw_ui, field_viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!(
                "friend-quest {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run 'friend-quest --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging(&config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = GameState::new_session(&mut rng);
    tracing::info!("Starting Friend Quest (seed: {:?})", config.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, &mut rng);

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!(
        "Thanks for playing! Final score: {} ({} quests)",
        state.score, state.completed_quest_count
    );
    Ok(())
}

/// Log to the file given by `--log`. Without it nothing is installed, so
/// the terminal UI stays clean.
fn init_logging(config: &GameConfig) -> io::Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("friend_quest=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut GameState,
    rng: &mut StdRng,
) -> io::Result<()> {
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut intents: Vec<Intent> = Vec::new();

    loop {
        terminal.draw(|frame| draw_ui(frame, state))?;

        // Collect input until the next tick is due
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let context = InputContext::for_state(state);
            let intent = match event::read()? {
                Event::Key(key) => map_key(key, context),
                Event::Mouse(mouse) => map_mouse(mouse, field_viewport(terminal.size()?)),
                _ => None,
            };
            intents.extend(intent);
        }

        if last_tick.elapsed() >= tick {
            let dt_ms = last_tick.elapsed().as_millis() as u64;
            last_tick = Instant::now();
            let result = game_tick(state, &intents, dt_ms, rng);
            intents.clear();
            apply_tick_events(state, &result.events);
            if result.quit {
                tracing::info!("Quit requested");
                return Ok(());
            }
        }
    }
}
