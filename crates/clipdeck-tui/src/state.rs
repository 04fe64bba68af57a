//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── gate / nav / screen     (role-gated navigation)
//! │   ├── auth, feed, search, notifications, profile, admin (per screen)
//! │   ├── detail: Option<Video>   (video detail view over the current tab)
//! │   ├── task_seq / tasks        (async task bookkeeping)
//! │   └── status                  (transient status line message)
//! └── overlay: Option<Overlay>    (modal overlays)
//! ```
//!
//! Overlays live beside `TuiState` so their handlers can hold `&mut self`
//! and `&TuiState` at the same time.

use clipdeck_core::config::Config;
use clipdeck_core::models::Video;
use clipdeck_core::navigator::{NavState, RoleGate, Screen};

use crate::common::{TaskSeq, Tasks};
use crate::features::admin::AdminState;
use crate::features::auth::AuthState;
use crate::features::feed::FeedState;
use crate::features::notifications::NotificationsState;
use crate::features::profile::ProfileState;
use crate::features::search::SearchState;
use crate::overlays::Overlay;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

/// Non-overlay UI state.
#[derive(Debug)]
pub struct TuiState {
    pub should_quit: bool,
    pub api_url: String,

    pub gate: RoleGate,
    /// Currently mounted tree; `Loading` until the first session arrives.
    pub nav: NavState,
    /// Active screen; `None` while loading.
    pub screen: Option<Screen>,
    pub display_name: Option<String>,
    /// Stored admin flag, shown beside the token role when they disagree.
    pub admin_flag: bool,
    /// Set when the user asked to log out, so the next unauthenticated
    /// session reads "Logged out" instead of "Session expired".
    pub logout_requested: bool,

    pub auth: AuthState,
    pub feed: FeedState,
    pub detail: Option<Video>,
    pub search: SearchState,
    pub notifications: NotificationsState,
    pub profile: ProfileState,
    pub admin: AdminState,

    pub task_seq: TaskSeq,
    pub tasks: Tasks,

    pub status: Option<String>,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            api_url: config.api_url.clone(),
            gate: RoleGate::new(config.admin_role.clone()),
            nav: NavState::Loading,
            screen: None,
            display_name: None,
            admin_flag: false,
            logout_requested: false,
            auth: AuthState::default(),
            feed: FeedState::default(),
            detail: None,
            search: SearchState::default(),
            notifications: NotificationsState::default(),
            profile: ProfileState::default(),
            admin: AdminState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            status: None,
            spinner_frame: 0,
        }
    }

    /// Drops all per-session screen state when a different tree mounts.
    pub fn reset_screens(&mut self) {
        self.auth.reset();
        self.feed = FeedState::default();
        self.detail = None;
        self.search = SearchState::default();
        self.notifications = NotificationsState::default();
        self.profile = ProfileState::for_user(self.display_name.as_deref());
        self.admin = AdminState::default();
    }

    /// Label of the running task for the status line, if any.
    pub fn busy_label(&self) -> Option<&'static str> {
        let t = &self.tasks;
        if t.login.is_running() {
            Some("Logging in")
        } else if t.signup.is_running() {
            Some("Creating account")
        } else if t.upload.is_running() {
            Some("Uploading")
        } else if t.video_lookup.is_running() {
            Some("Searching")
        } else if t.feed.is_running() {
            Some("Loading videos")
        } else if t.media_load.is_running() {
            Some("Reading file")
        } else if t.playback.is_running() {
            Some("Preparing playback")
        } else {
            None
        }
    }
}
