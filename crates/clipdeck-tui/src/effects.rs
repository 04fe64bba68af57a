//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer never performs
//! I/O directly.
//!
//! Effects that start a task carry `task: Option<TaskId>`. Screens emit
//! them with `None`; the reducer assigns ids before handing them to the
//! runtime.

use std::path::PathBuf;

use clipdeck_core::forms::VideoUpload;
use clipdeck_core::models::{Credentials, Video};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};
use crate::overlays::MediaTarget;

#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    Login {
        task: Option<TaskId>,
        credentials: Credentials,
    },
    Signup {
        task: Option<TaskId>,
        credentials: Credentials,
    },

    /// Clear the stored session (logout, or an expired token).
    ClearSession,

    FetchVideos {
        task: Option<TaskId>,
    },
    FetchVideo {
        task: Option<TaskId>,
        id: String,
    },

    UploadVideo {
        task: Option<TaskId>,
        upload: VideoUpload,
    },

    /// Read a picked file from disk.
    LoadMedia {
        task: Option<TaskId>,
        target: MediaTarget,
        path: PathBuf,
    },

    /// Decode a video's payload to the cache and open the system player.
    PlayVideo {
        task: Option<TaskId>,
        video: Video,
    },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}

impl UiEffect {
    /// Kind and task slot of effects that run as tasks.
    pub(crate) fn task_slot(&mut self) -> Option<(TaskKind, &mut Option<TaskId>)> {
        match self {
            UiEffect::Login { task, .. } => Some((TaskKind::Login, task)),
            UiEffect::Signup { task, .. } => Some((TaskKind::Signup, task)),
            UiEffect::FetchVideos { task } => Some((TaskKind::Feed, task)),
            UiEffect::FetchVideo { task, .. } => Some((TaskKind::VideoLookup, task)),
            UiEffect::UploadVideo { task, .. } => Some((TaskKind::Upload, task)),
            UiEffect::LoadMedia { task, .. } => Some((TaskKind::MediaLoad, task)),
            UiEffect::PlayVideo { task, .. } => Some((TaskKind::Playback, task)),
            UiEffect::Quit | UiEffect::ClearSession | UiEffect::CancelTask { .. } => None,
        }
    }
}
