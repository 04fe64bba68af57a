//! Auth feature slice: login and signup screens.

mod render;
mod state;
mod update;

pub use render::{render_login, render_signup};
pub use state::{AuthState, LoginField, SignupField};
pub use update::{
    SIGNUP_FAILED, SIGNUP_SUCCEEDED, handle_login_key, handle_login_result, handle_signup_key,
    handle_signup_result,
};
