//! Admin feature slice: the upload dashboard.

mod render;
mod state;
mod update;

pub use render::render_dashboard;
pub use state::{AdminField, AdminState};
pub use update::{
    UPLOAD_FAILED, UPLOAD_SUCCEEDED, handle_admin_key, handle_media_picked,
    handle_upload_cancelled, handle_upload_finished,
};
