use clipdeck_core::api::ApiClient;
use clipdeck_core::forms::VideoUpload;
use clipdeck_core::models::Credentials;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

pub async fn login(client: ApiClient, credentials: Credentials) -> UiEvent {
    UiEvent::LoginFinished(client.login(&credentials).await)
}

pub async fn signup(client: ApiClient, credentials: Credentials) -> UiEvent {
    UiEvent::SignupFinished(client.signup(&credentials).await)
}

pub async fn list_videos(client: ApiClient) -> UiEvent {
    UiEvent::VideosLoaded(client.list_videos().await)
}

pub async fn get_video(client: ApiClient, id: String) -> UiEvent {
    UiEvent::VideoFound(client.get_video(&id).await)
}

/// Uploads a video. Cancelling drops the in-flight request.
pub async fn upload_video(
    client: ApiClient,
    upload: VideoUpload,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let request = client.upload_video(&upload);
    match cancel {
        Some(cancel) => {
            tokio::select! {
                biased;
                () = cancel.cancelled() => UiEvent::UploadCancelled,
                result = request => UiEvent::UploadFinished(result),
            }
        }
        None => UiEvent::UploadFinished(request.await),
    }
}
