//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! The runtime uses an "inbox" pattern for async event collection:
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//! - This eliminates per-operation receivers and simplifies event collection
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations (HTTP requests, session file)

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use pwx_core::session::Session;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate for animation updates (60fps = ~16ms per frame).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle (no request in flight, no recent input).
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime over the resolved server URL and the
    /// session rehydrated from disk (read once, before the loop starts).
    pub fn new(base_url: String, session: Option<Session>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        // Enter alternate screen and raw mode
        let term = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (state, startup_effects) = AppState::new(base_url, session);

        // Create inbox channel for async event collection
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = std::time::Instant::now();
        let mut runtime = Self {
            terminal: term,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        };

        // An authenticated boot starts the initial fetch before the loop.
        runtime.execute_effects(startup_effects);

        Ok(runtime)
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            // Collect events from the terminal and the inbox
            let mut events = self.collect_events()?;

            // Prepend Frame event with current terminal size
            // This ensures layout updates happen before other events
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            // Process each event through the reducer
            for event in events {
                // Track terminal activity for fast tick mode
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = std::time::Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at tick cadence
                // Terminal events update state but batch renders to next Tick
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            // Only render if something changed
            if dirty {
                // Render - state is a separate field, no borrow conflict
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the terminal and the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while a request is in flight (spinner animation) or
        // right after terminal input; slow polling otherwise to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll =
            self.state.tui.auth.loading || self.state.tui.vault.loading || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Calculate time until next tick for poll duration.
        // This ensures we wake up exactly when Tick is due.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        // Poll terminal events:
        // - If we already have events to process, do non-blocking poll
        // - Otherwise, block until next tick is due (keeps input responsive
        //   while hitting tick cadence)
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        // Emit Tick after poll - we've now waited until the tick interval
        // elapsed (or woke early due to terminal input)
        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect, sending the result event to the inbox.
    ///
    /// This centralizes the spawn-and-send pattern: handlers become pure
    /// async functions that return `UiEvent`, while the runtime handles
    /// spawning.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    /// Bearer token of the active session. The reducer only emits vault
    /// effects while authenticated; an empty token would just 401.
    fn bearer_token(&self) -> String {
        self.state
            .tui
            .auth
            .session
            .as_ref()
            .map(|session| session.token.clone())
            .unwrap_or_default()
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::ClearSession => handlers::clear_session(),
            UiEffect::Login { username, password } => {
                let base_url = self.state.tui.base_url.clone();
                self.spawn_effect(move || handlers::login(base_url, username, password));
            }
            UiEffect::Register { username, password } => {
                let base_url = self.state.tui.base_url.clone();
                self.spawn_effect(move || handlers::register(base_url, username, password));
            }
            UiEffect::FetchEntries => {
                let base_url = self.state.tui.base_url.clone();
                let token = self.bearer_token();
                self.spawn_effect(move || handlers::fetch_entries(base_url, token));
            }
            UiEffect::AddEntry { draft } => {
                let base_url = self.state.tui.base_url.clone();
                let token = self.bearer_token();
                self.spawn_effect(move || handlers::add_entry(base_url, token, draft));
            }
            UiEffect::UpdateEntry { id, patch } => {
                let base_url = self.state.tui.base_url.clone();
                let token = self.bearer_token();
                self.spawn_effect(move || handlers::update_entry(base_url, token, id, patch));
            }
            UiEffect::DeleteEntry { id } => {
                let base_url = self.state.tui.base_url.clone();
                let token = self.bearer_token();
                self.spawn_effect(move || handlers::delete_entry(base_url, token, id));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
