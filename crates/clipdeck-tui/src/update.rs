//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use chrono::Utc;
use clipdeck_core::api::SESSION_EXPIRED_MESSAGE;
use clipdeck_core::navigator::{NavState, Screen};
use clipdeck_core::session::Session;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{
    ScreenUpdate, admin, analytics, auth, cycle, feed, notifications, profile, search,
};
use crate::overlays::{MediaTarget, Overlay, OverlayRequest, OverlayTransition, OverlayUpdate};
use crate::state::{AppState, TuiState};

pub const LOGGED_OUT_MESSAGE: &str = "Logged out";

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute. Task effects leave here with ids assigned.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = reduce(app, event);
    assign_task_ids(&mut app.tui, &mut effects);
    effects
}

fn reduce(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::SessionChanged(session) => handle_session_changed(app, &session),

        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                reduce(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "dropping superseded task result");
                vec![]
            }
        }

        UiEvent::LoginFinished(result) => {
            let update = auth::handle_login_result(&mut app.tui.auth, result);
            apply_screen_update(app, update)
        }
        UiEvent::SignupFinished(result) => {
            let update = auth::handle_signup_result(&mut app.tui.auth, result);
            apply_screen_update(app, update)
        }
        UiEvent::VideosLoaded(result) => {
            if let Ok(videos) = &result {
                app.tui.notifications.sync(videos, Utc::now());
            }
            let update = feed::handle_videos_loaded(&mut app.tui.feed, result);
            apply_screen_update(app, update)
        }
        UiEvent::VideoFound(result) => {
            let tui = &mut app.tui;
            let update = search::handle_video_found(&mut tui.search, &mut tui.detail, result);
            apply_screen_update(app, update)
        }
        UiEvent::UploadFinished(result) => {
            let update = admin::handle_upload_finished(&mut app.tui.admin, result);
            apply_screen_update(app, update)
        }
        UiEvent::UploadCancelled => apply_screen_update(app, admin::handle_upload_cancelled()),
        UiEvent::MediaPicked { target, result } => {
            let update = match target {
                MediaTarget::Avatar => match result {
                    Ok(asset) => {
                        app.tui.profile.avatar = Some(asset);
                        ScreenUpdate::status("Avatar updated")
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to load avatar");
                        ScreenUpdate::open(OverlayRequest::error(format!(
                            "{}: {err}",
                            target.failure_message()
                        )))
                    }
                },
                MediaTarget::Video | MediaTarget::Thumbnail => {
                    admin::handle_media_picked(&mut app.tui.admin, target, result)
                }
            };
            apply_screen_update(app, update)
        }
        UiEvent::PlaybackReady(result) => {
            apply_screen_update(app, feed::handle_playback_ready(result))
        }
        UiEvent::LogoutFailed(err) => {
            tracing::warn!(error = %err, "logout failed");
            app.tui.logout_requested = false;
            apply_screen_update(
                app,
                ScreenUpdate::open(OverlayRequest::error(profile::LOGOUT_FAILED)),
            )
        }
    }
}

/// Remounts the navigator when the session resolves to a different tree.
fn handle_session_changed(app: &mut AppState, session: &Session) -> Vec<UiEffect> {
    let tui = &mut app.tui;
    let previous = tui.nav;
    let resolution = tui.gate.resolve(session);
    tui.admin_flag = session.is_admin;

    let mut effects = Vec::new();
    if resolution.clear_session {
        effects.push(UiEffect::ClearSession);
    }

    if resolution.state == previous {
        tui.display_name = resolution.display_name;
        return effects;
    }

    tui.tasks.abandon_all();
    app.overlay = None;

    let tui = &mut app.tui;
    tui.nav = resolution.state;
    tui.display_name = resolution.display_name;
    tui.reset_screens();
    tui.screen = resolution.state.initial_screen();

    let was_signed_in = matches!(previous, NavState::User | NavState::Admin);
    tui.status = match resolution.state {
        NavState::Unauthenticated if was_signed_in && tui.logout_requested => {
            Some(LOGGED_OUT_MESSAGE.to_string())
        }
        NavState::Unauthenticated if was_signed_in || resolution.clear_session => {
            Some(SESSION_EXPIRED_MESSAGE.to_string())
        }
        NavState::User | NavState::Admin => tui
            .display_name
            .as_ref()
            .map(|name| format!("Signed in as {name}")),
        _ => None,
    };
    tui.logout_requested = false;

    if let Some(screen) = tui.screen {
        effects.extend(mount_effects(tui, screen));
    }
    effects
}

fn mount_effects(tui: &TuiState, screen: Screen) -> Vec<UiEffect> {
    match screen {
        Screen::Home | Screen::Notifications | Screen::Analytics => {
            feed::mount(&tui.feed, &tui.tasks)
        }
        _ => vec![],
    }
}

fn switch_screen(tui: &mut TuiState, screen: Screen) -> Vec<UiEffect> {
    if !tui.nav.contains(screen) {
        return vec![];
    }
    tui.screen = Some(screen);
    tui.detail = None;
    mount_effects(tui, screen)
}

fn apply_screen_update(app: &mut AppState, update: ScreenUpdate) -> Vec<UiEffect> {
    let ScreenUpdate {
        mut effects,
        navigate,
        overlay,
        status,
    } = update;

    if effects.iter().any(|e| matches!(e, UiEffect::ClearSession)) {
        app.tui.logout_requested = true;
    }
    if let Some(status) = status {
        app.tui.status = Some(status);
    }
    if let Some(screen) = navigate {
        effects.extend(switch_screen(&mut app.tui, screen));
    }
    if let Some(request) = overlay {
        app.overlay = Some(Overlay::open(request));
    }
    effects
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    match update.transition {
        OverlayTransition::Stay => {}
        OverlayTransition::Close => app.overlay = None,
        OverlayTransition::Open(request) => app.overlay = Some(Overlay::open(request)),
    }
    update.effects
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if let Some(overlay) = app.overlay.as_mut() {
                overlay.paste(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(&app.tui, key);
        return apply_overlay_update(app, update);
    }

    app.tui.status = None;
    let Some(screen) = app.tui.screen else {
        return vec![];
    };

    if let Some(target) = tab_target(&app.tui, screen, key) {
        return switch_screen(&mut app.tui, target);
    }

    let tui = &mut app.tui;
    let update = if tui.detail.is_some() {
        feed::handle_detail_key(&mut tui.detail, &tui.tasks, key)
    } else {
        match screen {
            Screen::Login => auth::handle_login_key(&mut tui.auth, &tui.tasks, key),
            Screen::Signup => auth::handle_signup_key(&mut tui.auth, &tui.tasks, key),
            Screen::Home => feed::handle_feed_key(&mut tui.feed, &mut tui.detail, &tui.tasks, key),
            Screen::Search => {
                search::handle_search_key(&mut tui.search, &mut tui.detail, &tui.tasks, key)
            }
            Screen::Notifications => {
                notifications::handle_notifications_key(&mut tui.notifications, &tui.tasks, key)
            }
            Screen::Profile => profile::handle_profile_key(&mut tui.profile, tui.nav, key),
            Screen::Dashboard => admin::handle_admin_key(&mut tui.admin, &tui.tasks, key),
            Screen::Analytics => analytics::handle_analytics_key(&tui.tasks, key),
        }
    };
    apply_screen_update(app, update)
}

/// Tab switching: F1..F4 pick a tab, Ctrl+T cycles. The auth tree switches
/// through its own links instead.
fn tab_target(tui: &TuiState, current: Screen, key: KeyEvent) -> Option<Screen> {
    if tui.nav == NavState::Unauthenticated {
        return None;
    }
    let screens = tui.nav.screens();
    match key.code {
        KeyCode::F(n) if n >= 1 => screens.get(usize::from(n) - 1).copied(),
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let index = screens.iter().position(|s| *s == current).unwrap_or(0);
            screens.get(cycle(index, screens.len(), true)).copied()
        }
        _ => None,
    }
}

/// Gives each task effect an id and marks its slot running right away.
///
/// The runtime's `TaskStarted` arrives an iteration later; keys read in
/// the same batch must already see the task as running.
fn assign_task_ids(tui: &mut TuiState, effects: &mut [UiEffect]) {
    for effect in effects {
        if let Some((kind, slot)) = effect.task_slot() {
            let id = *slot.get_or_insert_with(|| tui.task_seq.next_id());
            tui.tasks.state_mut(kind).mark_pending(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use clipdeck_core::api::ApiError;
    use clipdeck_core::config::Config;
    use clipdeck_core::models::Video;
    use serde_json::json;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskKind, TaskMeta, TaskStarted};
    use crate::features::test_keys::{ctrl, key};

    fn token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.sig")
    }

    fn session(payload: Option<serde_json::Value>, is_admin: bool) -> Session {
        Session {
            token: payload.map(|p| token(&p)),
            is_admin,
        }
    }

    fn app() -> AppState {
        AppState::new(&Config::default())
    }

    /// Signs in with `role`, returning the mount effects too.
    fn mount(role: &str) -> (AppState, Vec<UiEffect>) {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::SessionChanged(session(
                Some(json!({"username": "ana", "role": role})),
                role == "admin",
            )),
        );
        (app, effects)
    }

    fn signed_in(role: &str) -> AppState {
        mount(role).0
    }

    fn press(app: &mut AppState, k: KeyEvent) -> Vec<UiEffect> {
        update(app, UiEvent::Terminal(Event::Key(k)))
    }

    /// Runs a task's lifecycle: started, then completed with `result`.
    fn complete(app: &mut AppState, kind: TaskKind, id: TaskId, result: UiEvent) {
        update(
            app,
            UiEvent::TaskStarted {
                kind,
                started: TaskStarted {
                    id,
                    cancel: None,
                    meta: TaskMeta::None,
                },
            },
        );
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(result),
                },
            },
        );
    }

    #[test]
    fn test_no_token_mounts_login() {
        let mut app = app();
        let effects = update(&mut app, UiEvent::SessionChanged(Session::default()));
        assert!(effects.is_empty());
        assert_eq!(app.tui.nav, NavState::Unauthenticated);
        assert_eq!(app.tui.screen, Some(Screen::Login));
        assert!(app.tui.status.is_none());
    }

    /// Test: the token's role picks the tree, not the stored admin flag.
    #[test]
    fn test_role_comes_from_token() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::SessionChanged(session(Some(json!({"sub": "bo", "role": "user"})), true)),
        );
        assert_eq!(app.tui.nav, NavState::User);
        assert_eq!(app.tui.screen, Some(Screen::Home));
        assert!(app.tui.admin_flag);
        assert_eq!(app.tui.profile.name, "bo");
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::FetchVideos { task: Some(_) }]
        ));
    }

    #[test]
    fn test_admin_mounts_dashboard() {
        let app = signed_in("admin");
        assert_eq!(app.tui.nav, NavState::Admin);
        assert_eq!(app.tui.screen, Some(Screen::Dashboard));
        assert_eq!(app.tui.status.as_deref(), Some("Signed in as ana"));
    }

    #[test]
    fn test_expired_token_is_cleared() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::SessionChanged(session(Some(json!({"role": "user", "exp": 1})), false)),
        );
        assert_eq!(app.tui.nav, NavState::Unauthenticated);
        assert!(matches!(effects.as_slice(), [UiEffect::ClearSession]));
        assert_eq!(app.tui.status.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    }

    #[test]
    fn test_unreadable_token_fails_closed() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::SessionChanged(Session {
                token: Some("garbage".to_string()),
                is_admin: true,
            }),
        );
        assert_eq!(app.tui.nav, NavState::Unauthenticated);
    }

    #[test]
    fn test_server_logout_shows_session_expired() {
        let mut app = signed_in("user");
        update(&mut app, UiEvent::SessionChanged(Session::default()));
        assert_eq!(app.tui.screen, Some(Screen::Login));
        assert_eq!(app.tui.status.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    }

    #[test]
    fn test_profile_logout_flow() {
        let mut app = signed_in("user");
        app.tui.screen = Some(Screen::Profile);
        let rows = profile::ProfileRow::rows_for(NavState::User);
        app.tui.profile.selected = rows.len() - 1;

        let effects = press(&mut app, key(KeyCode::Enter));
        assert!(matches!(effects.as_slice(), [UiEffect::ClearSession]));
        assert!(app.tui.logout_requested);

        update(&mut app, UiEvent::SessionChanged(Session::default()));
        assert_eq!(app.tui.status.as_deref(), Some(LOGGED_OUT_MESSAGE));
        assert!(!app.tui.logout_requested);
    }

    #[test]
    fn test_logout_failure_alerts() {
        let mut app = signed_in("user");
        app.tui.logout_requested = true;
        update(&mut app, UiEvent::LogoutFailed("disk full".to_string()));
        assert!(!app.tui.logout_requested);
        match &app.overlay {
            Some(Overlay::Alert(alert)) => assert_eq!(alert.message, profile::LOGOUT_FAILED),
            _ => panic!("expected alert"),
        }
        assert_eq!(app.tui.nav, NavState::User);
    }

    /// Test: results of tasks started before a remount are ignored.
    #[test]
    fn test_remount_drops_in_flight_results() {
        let (mut app, effects) = mount("user");
        let [UiEffect::FetchVideos { task: Some(id) }] = effects.as_slice() else {
            panic!("expected feed fetch, got {effects:?}");
        };
        let id = *id;
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Feed,
                started: TaskStarted {
                    id,
                    cancel: None,
                    meta: TaskMeta::None,
                },
            },
        );

        update(&mut app, UiEvent::SessionChanged(Session::default()));
        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Feed,
                completed: TaskCompleted {
                    id,
                    result: Box::new(UiEvent::VideosLoaded(Ok(vec![Video::default()]))),
                },
            },
        );

        assert!(app.tui.feed.videos.is_empty());
        assert!(!app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_feed_load_populates_notifications() {
        let (mut app, effects) = mount("user");
        let [UiEffect::FetchVideos { task: Some(id) }] = effects.as_slice() else {
            panic!("expected feed fetch, got {effects:?}");
        };
        let videos = vec![
            Video {
                id: "1".to_string(),
                ..Video::default()
            },
            Video {
                id: "2".to_string(),
                ..Video::default()
            },
        ];
        complete(&mut app, TaskKind::Feed, *id, UiEvent::VideosLoaded(Ok(videos)));

        assert_eq!(app.tui.feed.videos.len(), 2);
        assert_eq!(app.tui.notifications.unread_count(), 2);
    }

    /// Test: a second submit read in the same input batch, before the
    /// runtime reports the first task as started, is ignored.
    #[test]
    fn test_double_enter_uploads_once() {
        let mut app = signed_in("admin");
        let asset = |name: &str, mime: &str| clipdeck_core::media::MediaAsset {
            file_name: name.to_string(),
            mime_type: mime.to_string(),
            bytes: vec![1],
        };
        app.tui.admin.form.title = "Launch".to_string();
        app.tui.admin.form.video = Some(asset("launch.mp4", "video/mp4"));
        app.tui.admin.form.thumbnail = Some(asset("launch.png", "image/png"));
        app.tui.admin.focus = admin::AdminField::Upload;

        let mut uploads = 0;
        for _ in 0..2 {
            let effects = press(&mut app, key(KeyCode::Enter));
            uploads += effects
                .iter()
                .filter(|e| matches!(e, UiEffect::UploadVideo { .. }))
                .count();
        }

        assert_eq!(uploads, 1);
        assert!(app.tui.tasks.upload.is_running());
    }

    #[test]
    fn test_double_enter_logs_in_once() {
        let mut app = app();
        update(&mut app, UiEvent::SessionChanged(Session::default()));
        app.tui.auth.login.username = "ana".to_string();
        app.tui.auth.login.password = "pw".to_string();
        app.tui.auth.login_focus = auth::LoginField::Password;

        let mut logins = 0;
        for _ in 0..2 {
            let effects = press(&mut app, key(KeyCode::Enter));
            logins += effects
                .iter()
                .filter(|e| matches!(e, UiEffect::Login { .. }))
                .count();
        }

        assert_eq!(logins, 1);
    }

    /// Test: a start report for a superseded id leaves the pending task in
    /// place and cancels the stale token.
    #[test]
    fn test_stale_start_does_not_replace_pending_task() {
        let (mut app, effects) = mount("user");
        let [UiEffect::FetchVideos { task: Some(id) }] = effects.as_slice() else {
            panic!("expected feed fetch, got {effects:?}");
        };
        let id = *id;
        let stale = CancellationToken::new();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Feed,
                started: TaskStarted {
                    id: TaskId(id.0 + 100),
                    cancel: Some(stale.clone()),
                    meta: TaskMeta::None,
                },
            },
        );

        assert!(stale.is_cancelled());
        assert_eq!(app.tui.tasks.feed.active, Some(id));
    }

    #[test]
    fn test_function_keys_switch_tabs() {
        let mut app = signed_in("user");
        app.tui.feed.loaded = true;

        press(&mut app, key(KeyCode::F(2)));
        assert_eq!(app.tui.screen, Some(Screen::Search));

        let effects = press(&mut app, key(KeyCode::F(3)));
        assert_eq!(app.tui.screen, Some(Screen::Notifications));
        assert!(effects.is_empty());

        press(&mut app, key(KeyCode::F(9)));
        assert_eq!(app.tui.screen, Some(Screen::Notifications));

        press(&mut app, ctrl('t'));
        assert_eq!(app.tui.screen, Some(Screen::Profile));
        press(&mut app, ctrl('t'));
        assert_eq!(app.tui.screen, Some(Screen::Home));
    }

    #[test]
    fn test_admin_tree_has_no_user_tabs() {
        let mut app = signed_in("admin");
        press(&mut app, key(KeyCode::F(4)));
        assert_eq!(app.tui.screen, Some(Screen::Dashboard));
        press(&mut app, key(KeyCode::F(2)));
        assert_eq!(app.tui.screen, Some(Screen::Analytics));
    }

    #[test]
    fn test_ctrl_c_quits_even_with_overlay() {
        let mut app = signed_in("admin");
        app.overlay = Some(Overlay::open(OverlayRequest::error("x")));
        let effects = press(&mut app, ctrl('c'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_overlay_captures_keys() {
        let mut app = signed_in("admin");
        app.overlay = Some(Overlay::open(OverlayRequest::MediaPicker {
            target: MediaTarget::Video,
        }));
        press(&mut app, key(KeyCode::Char('a')));
        assert!(app.tui.admin.form.title.is_empty());

        press(&mut app, key(KeyCode::Esc));
        match &app.overlay {
            Some(Overlay::Alert(alert)) => assert_eq!(alert.message, "No video selected!"),
            _ => panic!("expected alert"),
        }

        let effects = press(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_paste_fills_picker() {
        let mut app = signed_in("admin");
        app.overlay = Some(Overlay::open(OverlayRequest::MediaPicker {
            target: MediaTarget::Thumbnail,
        }));
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("/tmp/thumb.png\n".to_string())),
        );
        match &app.overlay {
            Some(Overlay::MediaPicker(picker)) => assert_eq!(picker.input, "/tmp/thumb.png"),
            _ => panic!("expected picker"),
        }
    }

    #[test]
    fn test_picker_submit_assigns_task() {
        let mut app = signed_in("admin");
        app.overlay = Some(Overlay::open(OverlayRequest::MediaPicker {
            target: MediaTarget::Video,
        }));
        press(&mut app, key(KeyCode::Char('/')));
        let effects = press(&mut app, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadMedia {
                task: Some(_),
                target: MediaTarget::Video,
                ..
            }]
        ));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_signup_success_navigates_with_alert() {
        let mut app = app();
        update(&mut app, UiEvent::SessionChanged(Session::default()));
        app.tui.screen = Some(Screen::Signup);

        update(&mut app, UiEvent::SignupFinished(Ok(())));

        assert_eq!(app.tui.screen, Some(Screen::Login));
        assert!(matches!(app.overlay, Some(Overlay::Alert(_))));
    }

    #[test]
    fn test_search_hit_opens_detail_and_esc_returns() {
        let mut app = signed_in("user");
        app.tui.screen = Some(Screen::Search);
        update(
            &mut app,
            UiEvent::VideoFound(Ok(Video {
                id: "5".to_string(),
                ..Video::default()
            })),
        );
        assert!(app.tui.detail.is_some());

        press(&mut app, key(KeyCode::Esc));
        assert!(app.tui.detail.is_none());
        assert_eq!(app.tui.screen, Some(Screen::Search));
    }

    #[test]
    fn test_avatar_pick_updates_profile() {
        let mut app = signed_in("user");
        update(
            &mut app,
            UiEvent::MediaPicked {
                target: MediaTarget::Avatar,
                result: Ok(clipdeck_core::media::MediaAsset {
                    file_name: "me.png".to_string(),
                    mime_type: "image/png".to_string(),
                    bytes: vec![0],
                }),
            },
        );
        assert!(app.tui.profile.avatar.is_some());
        assert_eq!(app.tui.status.as_deref(), Some("Avatar updated"));
    }

    #[test]
    fn test_upload_error_alerts() {
        let mut app = signed_in("admin");
        update(
            &mut app,
            UiEvent::UploadFinished(Err(ApiError::http_status(500, ""))),
        );
        match &app.overlay {
            Some(Overlay::Alert(alert)) => assert_eq!(alert.message, admin::UPLOAD_FAILED),
            _ => panic!("expected alert"),
        }
    }
}
