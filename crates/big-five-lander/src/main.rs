use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

mod actions;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction, SplashAction};
use big_five_config::AppConfig;
use dispatcher::Dispatcher;
use middleware::{KeyboardMiddleware, LoggingMiddleware, RevealMiddleware, SplashMiddleware};
use state::AppState;
use store::Store;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting big-five-lander, logging to {}", log_file.display());

    let config = AppConfig::load();
    config.validate().context("Invalid configuration")?;

    // Timers run here; declared before the store so the store (and its timers) drop first
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let (action_tx, action_rx) = mpsc::channel();
    let dispatcher = Dispatcher::new(action_tx);

    let tick_rate = config.tick_rate();
    let target_count = config.targets.len();
    let splash_duration = config.splash_duration();
    let reveal_interval = config.reveal_interval();

    let mut store = Store::new(AppState::new(config), dispatcher);

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SplashMiddleware::new(
        runtime.handle().clone(),
        splash_duration,
    )));
    store.add_middleware(Box::new(RevealMiddleware::new(
        runtime.handle().clone(),
        target_count,
        reveal_interval,
    )));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store, &action_rx, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(store);
    runtime.shutdown_timeout(Duration::from_millis(100));

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting big-five-lander");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    action_rx: &Receiver<Action>,
    tick_rate: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize {
        width: size.width,
        height: size.height,
    }));
    store.dispatch(Action::Splash(SplashAction::Start));

    let mut last_tick = Instant::now();

    loop {
        // Process actions queued by middleware and timers
        while let Ok(action) = action_rx.try_recv() {
            store.dispatch(action);
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(width, height) => {
                    store.dispatch(Action::Global(GlobalAction::Resize { width, height }));
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            store.dispatch(Action::Global(GlobalAction::Tick));
            last_tick = Instant::now();
        }
    }

    Ok(())
}
