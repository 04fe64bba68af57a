//! Login, signup, logout and status handlers.

use anyhow::{Context, Result};
use clipdeck_core::api::{ApiClient, SESSION_EXPIRED_MESSAGE};
use clipdeck_core::config::Config;
use clipdeck_core::forms::{LoginForm, SignupForm};
use clipdeck_core::navigator::{NavState, RoleGate};
use clipdeck_core::session::SessionStore;

pub async fn login(
    config: &Config,
    session: SessionStore,
    username: String,
    password: String,
) -> Result<()> {
    let credentials = LoginForm { username, password }.validate()?;
    let client = ApiClient::from_config(config, session)?;
    let response = client.login(&credentials).await?;

    if response.is_admin {
        println!("Logged in as {} (admin)", credentials.username);
    } else {
        println!("Logged in as {}", credentials.username);
    }
    Ok(())
}

pub async fn signup(
    config: &Config,
    session: SessionStore,
    username: String,
    password: String,
) -> Result<()> {
    let form = SignupForm {
        username,
        confirm_password: password.clone(),
        password,
    };
    let credentials = form.validate()?;
    let client = ApiClient::from_config(config, session)?;
    client.signup(&credentials).await?;
    println!("Account created. Run `clipdeck login` to sign in.");
    Ok(())
}

pub fn logout(session: &SessionStore) -> Result<()> {
    session.clear().context("clear session")?;
    println!("Logged out");
    Ok(())
}

pub fn status(config: &Config, session: &SessionStore) -> Result<()> {
    let mut gate = RoleGate::new(config.admin_role.clone());
    let resolution = gate.resolve(&session.snapshot());

    if resolution.clear_session {
        session.clear().context("clear expired session")?;
        println!("{SESSION_EXPIRED_MESSAGE}");
    }

    match resolution.state {
        NavState::User | NavState::Admin => {
            let role = if resolution.state == NavState::Admin {
                "admin"
            } else {
                "user"
            };
            let name = resolution.display_name.as_deref().unwrap_or("unknown");
            println!("Logged in as {name} ({role})");
            let screens: Vec<&str> = resolution
                .state
                .screens()
                .iter()
                .map(|s| s.title())
                .collect();
            println!("Screens: {}", screens.join(", "));
        }
        NavState::Loading | NavState::Unauthenticated => println!("Not logged in"),
    }

    println!("Server: {}", config.effective_api_url()?);
    Ok(())
}
