//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! timer ticks, session changes, and results of spawned tasks.

use std::path::PathBuf;

use clipdeck_core::api::ApiResult;
use clipdeck_core::media::MediaAsset;
use clipdeck_core::models::{LoginResponse, Video};
use clipdeck_core::session::Session;
use crossterm::event::Event;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};
use crate::overlays::MediaTarget;

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (drives the spinner and redraws).
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// The session store published a new session.
    SessionChanged(Session),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    LoginFinished(ApiResult<LoginResponse>),
    SignupFinished(ApiResult<()>),
    VideosLoaded(ApiResult<Vec<Video>>),
    VideoFound(ApiResult<Video>),
    UploadFinished(ApiResult<Option<Video>>),
    /// Upload aborted by the user before the server answered.
    UploadCancelled,
    MediaPicked {
        target: MediaTarget,
        result: Result<MediaAsset, String>,
    },
    PlaybackReady(Result<PathBuf, String>),
    /// Clearing the stored session failed.
    LogoutFailed(String),
}
