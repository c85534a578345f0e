//! Terminal player main loop.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::Config;
use crate::page::Page;
use crate::player::input::handle_event;
use crate::player::render::render_page;
use crate::player::state::{InputResult, PageState, TerminalHost};
use crate::provider::{ProviderBootstrap, SimulatedFactory, SimulatedLoader};
use crate::registry::InstanceRegistry;

/// Longest wait for input when no timer is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Simulated provider configured for this page.
fn build_factory(page: &Page, config: &Config) -> SimulatedFactory {
    let mut factory = SimulatedFactory::new(config.simulator.default_duration_secs)
        .with_errors(&config.simulator.error_videos);
    for placement in &page.players {
        if let Some(duration) = placement.duration {
            factory = factory.with_duration(placement.video_id.trim(), duration);
        }
    }
    factory
}

/// Register every placement of `page`. Invalid placements are kept as
/// rejected entries so their error still shows.
fn register_page<'b>(
    page: &Page,
    config: &Config,
    bootstrap: &'b ProviderBootstrap,
) -> InstanceRegistry<'b, TerminalHost> {
    let mut registry = InstanceRegistry::new(
        bootstrap,
        Box::new(build_factory(page, config)),
        config.poll_settings(),
    );
    for placement in &page.players {
        if let Err(e) = registry.register(
            &placement.video_id,
            placement.start_secs(),
            placement.end_secs(),
            TerminalHost::default(),
        ) {
            tracing::warn!(video_id = %placement.video_id, error = %e, "placement rejected");
        }
    }
    registry
}

fn needs_render(page: &PageState, registry: &InstanceRegistry<'_, TerminalHost>) -> bool {
    page.needs_render || registry.iter().any(|c| c.ui().needs_render)
}

fn clear_render_flags(page: &mut PageState, registry: &mut InstanceRegistry<'_, TerminalHost>) {
    page.needs_render = false;
    for controller in registry.iter_mut() {
        controller.ui_mut().needs_render = false;
    }
}

/// Play every placement of `page` in the terminal until the user quits.
pub fn play_page(page: &Page, config: &Config) -> Result<()> {
    let bootstrap = ProviderBootstrap::global();
    let mut registry = register_page(page, config, bootstrap);

    let mut loader = SimulatedLoader::default();
    registry.load_provider(&mut loader)?;
    // The simulated API is ready as soon as it is requested
    registry.on_provider_ready();

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let title = page
        .title
        .clone()
        .unwrap_or_else(|| "segplay".to_string());
    let mut state = PageState::new(title, cols, rows);

    let guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    let result = run_loop(&mut stdout, &mut state, &mut registry, config);

    registry.destroy_all();
    drop(guard);
    result
}

fn run_loop<W: Write>(
    out: &mut W,
    state: &mut PageState,
    registry: &mut InstanceRegistry<'_, TerminalHost>,
    config: &Config,
) -> Result<()> {
    loop {
        registry.pump_all(Instant::now());

        if needs_render(state, registry) {
            render_page(out, state, registry)?;
            clear_render_flags(state, registry);
        }

        let timeout = registry
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            let event = event::read()?;
            if handle_event(event, registry, state, &config.player, Instant::now())
                == InputResult::Quit
            {
                tracing::info!("player quit by user");
                return Ok(());
            }
        }
    }
}
