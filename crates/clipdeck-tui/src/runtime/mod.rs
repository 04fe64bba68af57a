//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Spawned handlers send their `UiEvent` to `inbox_tx`; the runtime drains
//! `inbox_rx` every iteration. Session changes arrive separately through
//! the session store's watch channel and are turned into
//! `UiEvent::SessionChanged`.

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clipdeck_core::api::ApiClient;
use clipdeck_core::config::Config;
use clipdeck_core::session::Session;
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskMeta, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame duration while something is happening (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    client: ApiClient,
    /// Session changes published by the store (login, logout, 401).
    session_rx: watch::Receiver<Session>,
    /// Where playback files are written.
    cache_dir: PathBuf,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    /// Last terminal event (for fast tick during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: &Config, client: ApiClient) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let mut state = AppState::new(config);
        state.tui.api_url = client.base_url().to_string();

        let session_rx = client.session().subscribe();
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            session_rx,
            cache_dir: config.media_cache_dir(),
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        // Resolve the stored session before the first frame leaves Loading.
        let initial = self.client.session().reload();
        self.session_rx.mark_unchanged();
        self.dispatch_event(UiEvent::SessionChanged(initial));

        let result = self.event_loop();

        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers render; other events batch to the next Tick
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
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

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from all sources (session, inbox, terminal, timer).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running() || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Inbox first: a task's TaskStarted must not land after the session
        // change that abandons it.
        self.collect_inbox_events(&mut events);
        self.collect_session_change(&mut events);

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        // Don't block on input when there is already work queued
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    /// Pushes the latest session if the store published since last check.
    ///
    /// Only the newest value matters; intermediate sessions are skipped.
    fn collect_session_change(&mut self, events: &mut Vec<UiEvent>) {
        if self.session_rx.has_changed().unwrap_or(false) {
            let session = self.session_rx.borrow_and_update().clone();
            events.push(UiEvent::SessionChanged(session));
        }
    }

    fn collect_inbox_events(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, meta: TaskMeta, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
            meta,
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            UiEffect::CancelTask { token, .. } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }

            // Session clearing is synchronous; the store publishes the new
            // session, which arrives on the next iteration.
            UiEffect::ClearSession => {
                if let Err(err) = self.client.logout() {
                    tracing::error!(error = %format!("{err:#}"), "failed to clear session");
                    self.dispatch_event(UiEvent::LogoutFailed(format!("{err:#}")));
                }
            }

            UiEffect::Login { task, credentials } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::Login, task, TaskMeta::None, false, move |_| {
                    handlers::login(client, credentials)
                });
            }
            UiEffect::Signup { task, credentials } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::Signup, task, TaskMeta::None, false, move |_| {
                    handlers::signup(client, credentials)
                });
            }

            UiEffect::FetchVideos { task } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::Feed, task, TaskMeta::None, false, move |_| {
                    handlers::list_videos(client)
                });
            }
            UiEffect::FetchVideo { task, id } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::VideoLookup, task, TaskMeta::None, false, move |_| {
                    handlers::get_video(client, id)
                });
            }

            UiEffect::UploadVideo { task, upload } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.client.clone();
                let meta = TaskMeta::Upload {
                    title: upload.title.clone(),
                };
                self.spawn_task(TaskKind::Upload, task, meta, true, move |cancel| {
                    handlers::upload_video(client, upload, cancel)
                });
            }

            UiEffect::LoadMedia { task, target, path } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::MediaLoad, task, TaskMeta::None, false, move |_| {
                    handlers::load_media(target, path)
                });
            }
            UiEffect::PlayVideo { task, video } => {
                let Some(task) = task else {
                    return;
                };
                let cache_dir = self.cache_dir.clone();
                self.spawn_task(TaskKind::Playback, task, TaskMeta::None, false, move |_| {
                    handlers::play_video(cache_dir, video)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
