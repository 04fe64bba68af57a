use clipdeck_core::models::Video;

#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub error: Option<String>,
    /// Last video found, kept so it can be reopened.
    pub result: Option<Video>,
}
