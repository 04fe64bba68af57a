//! Auth feature reducer.

use clipdeck_core::api::ApiResult;
use clipdeck_core::models::LoginResponse;
use clipdeck_core::navigator::Screen;
use crossterm::event::{KeyCode, KeyEvent};

use super::state::{AuthState, LoginField, SignupField};
use crate::common::Tasks;
use crate::effects::UiEffect;
use crate::features::{ScreenUpdate, cycle, edit_field};
use crate::overlays::OverlayRequest;

pub const SIGNUP_SUCCEEDED: &str = "Account created successfully";
pub const SIGNUP_FAILED: &str = "Failed to create account";

fn step<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let index = all.iter().position(|f| *f == current).unwrap_or(0);
    all[cycle(index, all.len(), forward)]
}

pub fn handle_login_key(auth: &mut AuthState, tasks: &Tasks, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            auth.login_focus = step(&LoginField::ALL, auth.login_focus, true);
            ScreenUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Up => {
            auth.login_focus = step(&LoginField::ALL, auth.login_focus, false);
            ScreenUpdate::none()
        }
        KeyCode::Enter => match auth.login_focus {
            LoginField::Username => {
                auth.login_focus = LoginField::Password;
                ScreenUpdate::none()
            }
            LoginField::Password | LoginField::Submit => submit_login(auth, tasks),
            LoginField::SignupLink => ScreenUpdate::navigate(Screen::Signup),
        },
        _ => {
            let field = match auth.login_focus {
                LoginField::Username => &mut auth.login.username,
                LoginField::Password => &mut auth.login.password,
                LoginField::Submit | LoginField::SignupLink => return ScreenUpdate::none(),
            };
            if edit_field(field, key) {
                auth.login_error = None;
            }
            ScreenUpdate::none()
        }
    }
}

fn submit_login(auth: &mut AuthState, tasks: &Tasks) -> ScreenUpdate {
    if tasks.login.is_running() {
        return ScreenUpdate::none();
    }
    match auth.login.validate() {
        Ok(credentials) => {
            auth.login_error = None;
            ScreenUpdate::effect(UiEffect::Login {
                task: None,
                credentials,
            })
        }
        Err(err) => {
            auth.login_error = Some(err.message);
            ScreenUpdate::none()
        }
    }
}

/// Applies a login result. Success needs no navigation here: the session
/// change remounts the tree.
pub fn handle_login_result(auth: &mut AuthState, result: ApiResult<LoginResponse>) -> ScreenUpdate {
    match result {
        Ok(_) => {
            auth.login.password.clear();
            auth.login_error = None;
        }
        Err(err) => {
            tracing::warn!(kind = %err.kind, error = %err, "login failed");
            auth.login_error = Some(err.message);
        }
    }
    ScreenUpdate::none()
}

pub fn handle_signup_key(auth: &mut AuthState, tasks: &Tasks, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            auth.signup_focus = step(&SignupField::ALL, auth.signup_focus, true);
            ScreenUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Up => {
            auth.signup_focus = step(&SignupField::ALL, auth.signup_focus, false);
            ScreenUpdate::none()
        }
        KeyCode::Enter => match auth.signup_focus {
            SignupField::Username => {
                auth.signup_focus = SignupField::Password;
                ScreenUpdate::none()
            }
            SignupField::Password => {
                auth.signup_focus = SignupField::Confirm;
                ScreenUpdate::none()
            }
            SignupField::Confirm | SignupField::Submit => submit_signup(auth, tasks),
            SignupField::LoginLink => ScreenUpdate::navigate(Screen::Login),
        },
        _ => {
            let field = match auth.signup_focus {
                SignupField::Username => &mut auth.signup.username,
                SignupField::Password => &mut auth.signup.password,
                SignupField::Confirm => &mut auth.signup.confirm_password,
                SignupField::Submit | SignupField::LoginLink => return ScreenUpdate::none(),
            };
            if edit_field(field, key) {
                auth.signup_error = None;
            }
            ScreenUpdate::none()
        }
    }
}

fn submit_signup(auth: &mut AuthState, tasks: &Tasks) -> ScreenUpdate {
    if tasks.signup.is_running() {
        return ScreenUpdate::none();
    }
    match auth.signup.validate() {
        Ok(credentials) => {
            auth.signup_error = None;
            ScreenUpdate::effect(UiEffect::Signup {
                task: None,
                credentials,
            })
        }
        Err(err) => {
            auth.signup_error = Some(err.message);
            ScreenUpdate::none()
        }
    }
}

/// Applies a signup result: success returns to Login with an alert.
pub fn handle_signup_result(auth: &mut AuthState, result: ApiResult<()>) -> ScreenUpdate {
    match result {
        Ok(()) => {
            let username = std::mem::take(&mut auth.signup.username);
            auth.signup = Default::default();
            auth.signup_focus = SignupField::Username;
            auth.signup_error = None;
            auth.login.username = username.trim().to_string();
            auth.login.password.clear();
            auth.login_focus = LoginField::Password;

            ScreenUpdate {
                navigate: Some(Screen::Login),
                overlay: Some(OverlayRequest::Alert {
                    title: "Success".to_string(),
                    message: SIGNUP_SUCCEEDED.to_string(),
                    is_error: false,
                }),
                ..ScreenUpdate::default()
            }
        }
        Err(err) => {
            tracing::warn!(kind = %err.kind, error = %err, "signup failed");
            auth.signup_error = Some(SIGNUP_FAILED.to_string());
            ScreenUpdate::status(err.message)
        }
    }
}
