//! Profile feature reducer.

use clipdeck_core::navigator::{NavState, Screen};
use crossterm::event::{KeyCode, KeyEvent};

use super::state::{ProfileField, ProfileRow, ProfileState};
use crate::effects::UiEffect;
use crate::features::{ScreenUpdate, edit_field};
use crate::overlays::{MediaTarget, OverlayRequest};

pub const LOGOUT_FAILED: &str = "Failed to log out. Try again.";

pub fn handle_profile_key(profile: &mut ProfileState, nav: NavState, key: KeyEvent) -> ScreenUpdate {
    if let Some(field) = profile.editing {
        return handle_edit_key(profile, field, key);
    }

    let rows = ProfileRow::rows_for(nav);
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if profile.selected + 1 < rows.len() {
                profile.selected += 1;
            }
            ScreenUpdate::none()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            profile.selected = profile.selected.saturating_sub(1);
            ScreenUpdate::none()
        }
        KeyCode::Enter => match rows.get(profile.selected) {
            Some(row) => activate(profile, *row),
            None => ScreenUpdate::none(),
        },
        _ => ScreenUpdate::none(),
    }
}

fn activate(profile: &mut ProfileState, row: ProfileRow) -> ScreenUpdate {
    match row {
        ProfileRow::EditName => {
            profile.draft = profile.name.clone();
            profile.editing = Some(ProfileField::Name);
            ScreenUpdate::none()
        }
        ProfileRow::EditBio => {
            profile.draft = profile.bio.clone();
            profile.editing = Some(ProfileField::Bio);
            ScreenUpdate::none()
        }
        ProfileRow::ChangeAvatar => ScreenUpdate::open(OverlayRequest::MediaPicker {
            target: MediaTarget::Avatar,
        }),
        ProfileRow::Notifications => ScreenUpdate::navigate(Screen::Notifications),
        ProfileRow::Privacy | ProfileRow::Language => {
            ScreenUpdate::status(format!("{} settings are not available yet", row.label()))
        }
        ProfileRow::LogOut => ScreenUpdate::effect(UiEffect::ClearSession),
    }
}

fn handle_edit_key(profile: &mut ProfileState, field: ProfileField, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Esc => {
            profile.editing = None;
            profile.draft.clear();
            ScreenUpdate::none()
        }
        KeyCode::Enter => {
            let value = profile.draft.trim().to_string();
            if field == ProfileField::Name && value.is_empty() {
                return ScreenUpdate::status("Name cannot be empty");
            }
            match field {
                ProfileField::Name => profile.name = value,
                ProfileField::Bio => profile.bio = value,
            }
            profile.editing = None;
            profile.draft.clear();
            ScreenUpdate::status("Profile updated")
        }
        _ => {
            edit_field(&mut profile.draft, key);
            ScreenUpdate::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::test_keys::{chars, ctrl, key};

    fn select(profile: &mut ProfileState, nav: NavState, row: ProfileRow) {
        profile.selected = ProfileRow::rows_for(nav)
            .iter()
            .position(|r| *r == row)
            .unwrap();
    }

    #[test]
    fn test_edit_name_round() {
        let mut profile = ProfileState::for_user(Some("ana"));
        handle_profile_key(&mut profile, NavState::User, key(KeyCode::Enter));
        assert_eq!(profile.editing, Some(ProfileField::Name));
        assert_eq!(profile.draft, "ana");

        handle_profile_key(&mut profile, NavState::User, ctrl('u'));
        for k in chars("Ana Lima") {
            handle_profile_key(&mut profile, NavState::User, k);
        }
        let update = handle_profile_key(&mut profile, NavState::User, key(KeyCode::Enter));

        assert_eq!(profile.name, "Ana Lima");
        assert!(profile.editing.is_none());
        assert_eq!(update.status.as_deref(), Some("Profile updated"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut profile = ProfileState::for_user(Some("ana"));
        profile.editing = Some(ProfileField::Name);
        let update = handle_profile_key(&mut profile, NavState::User, key(KeyCode::Enter));
        assert_eq!(profile.name, "ana");
        assert_eq!(profile.editing, Some(ProfileField::Name));
        assert!(update.status.is_some());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut profile = ProfileState::default();
        select(&mut profile, NavState::Admin, ProfileRow::LogOut);
        let update = handle_profile_key(&mut profile, NavState::Admin, key(KeyCode::Enter));
        assert!(matches!(update.effects.as_slice(), [UiEffect::ClearSession]));
    }

    #[test]
    fn test_avatar_opens_picker() {
        let mut profile = ProfileState::default();
        select(&mut profile, NavState::User, ProfileRow::ChangeAvatar);
        let update = handle_profile_key(&mut profile, NavState::User, key(KeyCode::Enter));
        assert_eq!(
            update.overlay,
            Some(OverlayRequest::MediaPicker {
                target: MediaTarget::Avatar
            })
        );
    }

    #[test]
    fn test_settings_rows() {
        let mut profile = ProfileState::default();
        select(&mut profile, NavState::User, ProfileRow::Notifications);
        let update = handle_profile_key(&mut profile, NavState::User, key(KeyCode::Enter));
        assert_eq!(update.navigate, Some(Screen::Notifications));

        select(&mut profile, NavState::User, ProfileRow::Privacy);
        let update = handle_profile_key(&mut profile, NavState::User, key(KeyCode::Enter));
        assert_eq!(
            update.status.as_deref(),
            Some("Privacy settings are not available yet")
        );
    }
}
