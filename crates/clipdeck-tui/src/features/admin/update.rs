//! Admin dashboard reducer.

use clipdeck_core::api::{ApiErrorKind, ApiResult};
use clipdeck_core::media::MediaAsset;
use clipdeck_core::models::Video;
use crossterm::event::{KeyCode, KeyEvent};

use super::state::{AdminField, AdminState};
use crate::common::{TaskKind, Tasks};
use crate::effects::UiEffect;
use crate::features::{ScreenUpdate, cycle, edit_field};
use crate::overlays::{MediaTarget, OverlayRequest};

pub const UPLOAD_SUCCEEDED: &str = "Video uploaded successfully";
pub const UPLOAD_FAILED: &str = "Failed to upload video";

fn step(current: AdminField, forward: bool) -> AdminField {
    let index = AdminField::ALL
        .iter()
        .position(|f| *f == current)
        .unwrap_or(0);
    AdminField::ALL[cycle(index, AdminField::ALL.len(), forward)]
}

pub fn handle_admin_key(admin: &mut AdminState, tasks: &Tasks, key: KeyEvent) -> ScreenUpdate {
    let uploading = tasks.upload.is_running();

    match key.code {
        KeyCode::Esc if uploading => ScreenUpdate::effect(UiEffect::CancelTask {
            kind: TaskKind::Upload,
            token: tasks.upload.cancel.clone(),
        }),
        KeyCode::Tab | KeyCode::Down => {
            admin.focus = step(admin.focus, true);
            ScreenUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Up => {
            admin.focus = step(admin.focus, false);
            ScreenUpdate::none()
        }
        KeyCode::Enter => match admin.focus {
            AdminField::Title | AdminField::Description => {
                admin.focus = step(admin.focus, true);
                ScreenUpdate::none()
            }
            AdminField::Video | AdminField::Thumbnail if uploading => {
                ScreenUpdate::status("Upload in progress")
            }
            AdminField::Video => ScreenUpdate::open(OverlayRequest::MediaPicker {
                target: MediaTarget::Video,
            }),
            AdminField::Thumbnail => ScreenUpdate::open(OverlayRequest::MediaPicker {
                target: MediaTarget::Thumbnail,
            }),
            AdminField::Upload => submit(admin, tasks),
            AdminField::Logout => ScreenUpdate::effect(UiEffect::ClearSession),
        },
        _ if admin.focus.is_text() && !uploading => {
            let field = if admin.focus == AdminField::Title {
                &mut admin.form.title
            } else {
                &mut admin.form.description
            };
            edit_field(field, key);
            ScreenUpdate::none()
        }
        _ => ScreenUpdate::none(),
    }
}

fn submit(admin: &AdminState, tasks: &Tasks) -> ScreenUpdate {
    if tasks.upload.is_running() {
        return ScreenUpdate::none();
    }
    match admin.form.validate() {
        Ok(upload) => {
            let status = format!("Uploading \"{}\"", upload.title);
            ScreenUpdate {
                effects: vec![UiEffect::UploadVideo { task: None, upload }],
                status: Some(status),
                ..ScreenUpdate::default()
            }
        }
        Err(err) => ScreenUpdate::open(OverlayRequest::error(err.message)),
    }
}

/// Stores a picked video or thumbnail.
pub fn handle_media_picked(
    admin: &mut AdminState,
    target: MediaTarget,
    result: Result<MediaAsset, String>,
) -> ScreenUpdate {
    match result {
        Ok(asset) => {
            let status = format!("Selected {} ({})", asset.file_name, asset.size_label());
            match target {
                MediaTarget::Video => admin.form.video = Some(asset),
                MediaTarget::Thumbnail => admin.form.thumbnail = Some(asset),
                MediaTarget::Avatar => return ScreenUpdate::none(),
            }
            ScreenUpdate::status(status)
        }
        Err(err) => {
            tracing::warn!(media = target.label(), error = %err, "failed to load media");
            ScreenUpdate::open(OverlayRequest::error(format!(
                "{}: {err}",
                target.failure_message()
            )))
        }
    }
}

pub fn handle_upload_finished(
    admin: &mut AdminState,
    result: ApiResult<Option<Video>>,
) -> ScreenUpdate {
    match result {
        Ok(video) => {
            tracing::info!(id = ?video.as_ref().map(|v| &v.id), "video uploaded");
            admin.form.reset();
            admin.focus = AdminField::Title;
            ScreenUpdate::open(OverlayRequest::Alert {
                title: "Success".to_string(),
                message: UPLOAD_SUCCEEDED.to_string(),
                is_error: false,
            })
        }
        Err(err) => {
            tracing::warn!(kind = %err.kind, error = %err, "upload failed");
            let message = match err.kind {
                ApiErrorKind::Forbidden | ApiErrorKind::NotAuthenticated => err.message.clone(),
                _ => UPLOAD_FAILED.to_string(),
            };
            ScreenUpdate {
                overlay: Some(OverlayRequest::error(message)),
                status: Some(err.message),
                ..ScreenUpdate::default()
            }
        }
    }
}

pub fn handle_upload_cancelled() -> ScreenUpdate {
    tracing::info!("upload cancelled");
    ScreenUpdate::status("Upload cancelled")
}

#[cfg(test)]
mod tests {
    use clipdeck_core::api::{ApiError, UPLOAD_FORBIDDEN_MESSAGE};
    use clipdeck_core::forms::MISSING_UPLOAD_FIELDS;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::common::{TaskId, TaskMeta, TaskStarted};
    use crate::features::test_keys::{chars, key};

    fn asset(name: &str, mime: &str) -> MediaAsset {
        MediaAsset {
            file_name: name.to_string(),
            mime_type: mime.to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    fn complete_form() -> AdminState {
        let mut admin = AdminState::default();
        admin.form.title = "Launch".to_string();
        admin.form.video = Some(asset("launch.mp4", "video/mp4"));
        admin.form.thumbnail = Some(asset("launch.png", "image/png"));
        admin
    }

    fn alert_message(update: &ScreenUpdate) -> Option<&str> {
        match &update.overlay {
            Some(OverlayRequest::Alert { message, .. }) => Some(message),
            _ => None,
        }
    }

    #[test]
    fn test_typing_fills_title_then_description() {
        let mut admin = AdminState::default();
        let tasks = Tasks::default();
        for k in chars("Hi") {
            handle_admin_key(&mut admin, &tasks, k);
        }
        handle_admin_key(&mut admin, &tasks, key(KeyCode::Enter));
        for k in chars("desc") {
            handle_admin_key(&mut admin, &tasks, k);
        }
        assert_eq!(admin.form.title, "Hi");
        assert_eq!(admin.form.description, "desc");
    }

    /// Test: an incomplete form raises an alert and sends nothing.
    #[test]
    fn test_incomplete_upload_alerts() {
        let mut admin = AdminState {
            focus: AdminField::Upload,
            ..Default::default()
        };
        let update = handle_admin_key(&mut admin, &Tasks::default(), key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert_eq!(alert_message(&update), Some(MISSING_UPLOAD_FIELDS));
    }

    #[test]
    fn test_complete_upload_emits_effect() {
        let mut admin = complete_form();
        admin.focus = AdminField::Upload;
        let update = handle_admin_key(&mut admin, &Tasks::default(), key(KeyCode::Enter));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::UploadVideo { upload, .. }] if upload.title == "Launch"
        ));
    }

    #[test]
    fn test_esc_cancels_running_upload() {
        let mut admin = complete_form();
        let mut tasks = Tasks::default();
        let token = CancellationToken::new();
        tasks.upload.on_started(&TaskStarted {
            id: TaskId(4),
            cancel: Some(token),
            meta: TaskMeta::Upload {
                title: "Launch".to_string(),
            },
        });

        let update = handle_admin_key(&mut admin, &tasks, key(KeyCode::Esc));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::CancelTask {
                kind: TaskKind::Upload,
                token: Some(_)
            }]
        ));

        handle_admin_key(&mut admin, &tasks, key(KeyCode::Char('x')));
        assert_eq!(admin.form.title, "Launch");
    }

    #[test]
    fn test_picked_media_is_stored() {
        let mut admin = AdminState::default();
        let update = handle_media_picked(
            &mut admin,
            MediaTarget::Thumbnail,
            Ok(asset("t.png", "image/png")),
        );
        assert!(admin.form.thumbnail.is_some());
        assert_eq!(update.status.as_deref(), Some("Selected t.png (3 B)"));

        let update = handle_media_picked(&mut admin, MediaTarget::Video, Err("missing".to_string()));
        assert_eq!(alert_message(&update), Some("Failed to pick a video: missing"));
        assert!(admin.form.video.is_none());
    }

    #[test]
    fn test_upload_success_resets_form() {
        let mut admin = complete_form();
        admin.focus = AdminField::Upload;
        let update = handle_upload_finished(&mut admin, Ok(None));
        assert_eq!(alert_message(&update), Some(UPLOAD_SUCCEEDED));
        assert_eq!(admin.form, Default::default());
        assert_eq!(admin.focus, AdminField::Title);
    }

    #[test]
    fn test_upload_failure_messages() {
        let mut admin = complete_form();
        let update = handle_upload_finished(
            &mut admin,
            Err(ApiError::forbidden(UPLOAD_FORBIDDEN_MESSAGE)),
        );
        assert_eq!(alert_message(&update), Some(UPLOAD_FORBIDDEN_MESSAGE));

        let update = handle_upload_finished(&mut admin, Err(ApiError::http_status(500, "")));
        assert_eq!(alert_message(&update), Some(UPLOAD_FAILED));
        assert!(admin.form.is_complete());
    }
}
