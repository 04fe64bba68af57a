//! Search feature slice: look up a single video by id.

mod render;
mod state;
mod update;

pub use render::render_search;
pub use state::SearchState;
pub use update::{VIDEO_NOT_FOUND, handle_search_key, handle_video_found};
