//! Feed feature slice: the video list on Home, and the detail view.

mod render;
mod state;
mod update;

pub use render::{render_detail, render_feed};
pub use state::FeedState;
pub use update::{
    NO_PLAYABLE_DATA, handle_detail_key, handle_feed_key, handle_playback_ready,
    handle_videos_loaded, mount, refresh,
};
