use clipdeck_core::forms::{LoginForm, SignupForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Submit,
    SignupLink,
}

impl LoginField {
    pub const ALL: [LoginField; 4] = [
        LoginField::Username,
        LoginField::Password,
        LoginField::Submit,
        LoginField::SignupLink,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Username,
    Password,
    Confirm,
    Submit,
    LoginLink,
}

impl SignupField {
    pub const ALL: [SignupField; 5] = [
        SignupField::Username,
        SignupField::Password,
        SignupField::Confirm,
        SignupField::Submit,
        SignupField::LoginLink,
    ];
}

/// Form state for the unauthenticated tree.
#[derive(Debug, Default)]
pub struct AuthState {
    pub login: LoginForm,
    pub login_focus: LoginField,
    pub login_error: Option<String>,
    pub signup: SignupForm,
    pub signup_focus: SignupField,
    pub signup_error: Option<String>,
}

impl AuthState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
