//! Interactive carousel player
//!
//! Cycles through a fixed ordered sequence of slides, advancing
//! automatically unless paused, and responds to explicit navigation
//! input.
//!
//! # Architecture
//!
//! - `state`: CarouselState struct and shared types (InputResult)
//! - `autoplay`: the recurring timer owned by the mounted instance
//! - `gesture`: horizontal drag/swipe tracking
//! - `input/`: keyboard and mouse input handling
//! - `render/`: track, pagination dots, footer, help overlay
//!
//! The player is single-threaded and event-loop-driven: one
//! `crossterm::event::poll` with a timeout derived from the autoplay
//! deadline. Terminal acquisition and release are scoped to [`run`],
//! so no listeners or timers survive teardown.

pub mod autoplay;
pub mod gesture;
pub mod input;
pub mod render;
pub mod state;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::deck::Deck;
use crate::theme::Theme;

pub use autoplay::{AutoplayTimer, DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS};
pub use gesture::{DragTracker, Swipe, SWIPE_THRESHOLD};
pub use state::{CarouselState, InputResult};

/// Poll timeout while no autoplay deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Options for a carousel run, resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Requested autoplay period in milliseconds (floored at runtime)
    pub interval_ms: u64,
    /// Maximum track height in rows (cosmetic sizing hint)
    pub height: Option<u16>,
    /// Start with autoplay paused
    pub start_paused: bool,
    /// Theme for rendering
    pub theme: Theme,
}

/// How a carousel run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The user quit normally
    Finished,
    /// The deck had no displayable slides; nothing was rendered
    EmptyDeck,
}

/// Run the carousel until the user quits.
///
/// An empty deck renders nothing: the terminal is never put into raw
/// mode and no timer is created.
pub fn run(deck: &Deck, opts: &PlayOptions) -> Result<PlayOutcome> {
    if deck.is_empty() {
        return Ok(PlayOutcome::EmptyDeck);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, deck, opts);

    // Release the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

/// The event loop: render, wait for input or the autoplay deadline,
/// apply, repeat.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    deck: &Deck,
    opts: &PlayOptions,
) -> Result<PlayOutcome> {
    let mut state = CarouselState::new(deck.len());
    state.user_paused = opts.start_paused;
    let mut timer = AutoplayTimer::new(opts.interval_ms);
    let mut drag = DragTracker::default();
    timer.sync(state.autoplay_active(), Instant::now());

    loop {
        if state.needs_render {
            terminal.draw(|frame| {
                render::draw(frame, deck, &state, &drag, &opts.theme, opts.height)
            })?;
            state.needs_render = false;
        }

        let timeout = timer.timeout_until(Instant::now()).unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            let geo = current_geometry(terminal, deck.len(), opts.height)?;
            let result = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key_event(key, &mut state)
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse_event(mouse, &mut state, &mut drag, &geo)
                }
                Event::Resize(_, _) => {
                    state.needs_render = true;
                    InputResult::Continue
                }
                Event::FocusLost => {
                    // An interrupted gesture never leaves stuck drag state
                    drag.reset();
                    state.resume();
                    state.needs_render = true;
                    InputResult::Continue
                }
                _ => InputResult::Continue,
            };
            if result == InputResult::Quit {
                return Ok(PlayOutcome::Finished);
            }
            // Recreate or cancel the timer when its dependencies changed
            timer.sync(state.autoplay_active(), Instant::now());
        }

        if timer.fire(Instant::now()) {
            state.advance(1);
        }
    }
}

/// Compute the hit-testing geometry for the current terminal size.
fn current_geometry(
    terminal: &Terminal<CrosstermBackend<io::Stdout>>,
    len: usize,
    height_cap: Option<u16>,
) -> Result<render::Geometry> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);
    Ok(render::compute_geometry(area, len, height_cap))
}
