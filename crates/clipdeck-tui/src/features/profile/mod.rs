//! Profile feature slice: local profile edits, settings rows, and logout.

mod render;
mod state;
mod update;

pub use render::render_profile;
pub use state::{DEFAULT_NAME, ProfileField, ProfileRow, ProfileState};
pub use update::{LOGOUT_FAILED, handle_profile_key};
