use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    Signup,
    Feed,
    VideoLookup,
    Upload,
    MediaLoad,
    Playback,
}

#[derive(Debug, Clone, Default)]
pub enum TaskMeta {
    #[default]
    None,
    Upload {
        title: String,
    },
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
    pub meta: TaskMeta,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
    pub meta: TaskMeta,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `id` as the running task before the runtime reports its start.
    pub fn mark_pending(&mut self, id: TaskId) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.active = Some(id);
        self.meta = TaskMeta::None;
    }

    /// Attaches the runtime's cancel token and metadata.
    ///
    /// A start for an id other than the pending one is superseded: its
    /// token is cancelled and the slot is left alone.
    pub fn on_started(&mut self, started: &TaskStarted) {
        if self.active.is_some_and(|active| active != started.id) {
            if let Some(cancel) = &started.cancel {
                cancel.cancel();
            }
            return;
        }
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
        self.meta = started.meta.clone();
    }

    /// Marks the task finished if `id` is still the active one.
    ///
    /// Returns false for superseded ids; their results must be dropped.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
        self.meta = TaskMeta::None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub signup: TaskState,
    pub feed: TaskState,
    pub video_lookup: TaskState,
    pub upload: TaskState,
    pub media_load: TaskState,
    pub playback: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Login => &self.login,
            TaskKind::Signup => &self.signup,
            TaskKind::Feed => &self.feed,
            TaskKind::VideoLookup => &self.video_lookup,
            TaskKind::Upload => &self.upload,
            TaskKind::MediaLoad => &self.media_load,
            TaskKind::Playback => &self.playback,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::Signup => &mut self.signup,
            TaskKind::Feed => &mut self.feed,
            TaskKind::VideoLookup => &mut self.video_lookup,
            TaskKind::Upload => &mut self.upload,
            TaskKind::MediaLoad => &mut self.media_load,
            TaskKind::Playback => &mut self.playback,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.login.is_running()
            || self.signup.is_running()
            || self.feed.is_running()
            || self.video_lookup.is_running()
            || self.upload.is_running()
            || self.media_load.is_running()
            || self.playback.is_running()
    }

    /// Drops every in-flight task, cancelling the cancelable ones.
    ///
    /// Results that arrive afterwards fail `finish_if_active` and are ignored.
    pub fn abandon_all(&mut self) {
        for state in [
            &mut self.login,
            &mut self.signup,
            &mut self.feed,
            &mut self.video_lookup,
            &mut self.upload,
            &mut self.media_load,
            &mut self.playback,
        ] {
            if let Some(cancel) = state.cancel.take() {
                cancel.cancel();
            }
            state.clear();
        }
    }
}
