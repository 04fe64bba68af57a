//! Notifications feature slice.
//!
//! Entries are derived from the feed: each video becomes a "New Video
//! Upload" notification the first time it is seen.

mod render;
mod state;
mod update;

pub use render::render_notifications;
pub use state::NotificationsState;
pub use update::handle_notifications_key;
