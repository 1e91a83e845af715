//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s to `inbox_tx`; the runtime drains
//! `inbox_rx` each frame. Network results arrive here, so a response can
//! land on any frame after the view that asked for it was left — the
//! reducer's fetch-sequence check handles that.

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use poldeck_core::api::{AuthClient, PolicyClient};
use poldeck_core::config::Config;
use poldeck_core::session::{Session, SessionStore};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Route};
use crate::{render, terminal, update};

/// Tick cadence while a request is in flight (spinner animation).
const ACTIVE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop,
/// panic, or normal exit.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    store: SessionStore,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    pub fn new(config: Config, session: Session, store: SessionStore) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config, session);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            store,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        // Start at the guarded root; the guard redirects to the login
        // screen when no token is stored.
        let effects = update::navigate(&mut self.state, Route::PolicyList);
        self.execute_effects(effects);

        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the terminal and the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast ticks only while something is in flight.
        let in_flight = self.state.login.is_submitting()
            || self.state.policies.pending_seq.is_some()
            || self.state.detail.pending_seq.is_some();
        let tick_interval = if in_flight {
            ACTIVE_POLL_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - async results arrive here.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due unless we already have work.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Executes a single effect. Network effects are spawned; their
    /// results come back through the inbox.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::PersistSession { session } => {
                // A failed write is logged but not fatal: the in-memory
                // session still satisfies the guard for this run.
                if let Err(e) = self.store.save(&session) {
                    tracing::error!("failed to persist session: {e:#}");
                }
            }
            UiEffect::SubmitLogin { credentials } => {
                let client = AuthClient::new(self.state.config.api_url.clone());
                self.spawn_effect(async move {
                    let result = client
                        .login(&credentials)
                        .await
                        .map_err(|e| format!("{e:#}"));
                    UiEvent::LoginCompleted { result }
                });
            }
            UiEffect::FetchPolicies { seq } => {
                let client = self.policy_client();
                self.spawn_effect(async move {
                    let result = client.list().await.map_err(|e| format!("{e:#}"));
                    UiEvent::PoliciesLoaded { seq, result }
                });
            }
            UiEffect::FetchPolicy { seq, id } => {
                let client = self.policy_client();
                self.spawn_effect(async move {
                    let result = client.get(id).await.map_err(|e| format!("{e:#}"));
                    UiEvent::PolicyLoaded { seq, result }
                });
            }
        }
    }

    fn policy_client(&self) -> PolicyClient {
        PolicyClient::new(
            self.state.config.api_url.clone(),
            self.state.session.token().map(str::to_string),
        )
    }

    /// Spawns an async effect, sending its result event to the inbox.
    fn spawn_effect<F>(&self, f: F)
    where
        F: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f.await);
        });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
