use clipdeck_core::media::MediaAsset;
use clipdeck_core::navigator::{NavState, Screen};

pub const DEFAULT_NAME: &str = "User";
pub const DEFAULT_BIO: &str = "No bio yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Bio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRow {
    EditName,
    EditBio,
    ChangeAvatar,
    Notifications,
    Privacy,
    Language,
    LogOut,
}

impl ProfileRow {
    pub fn label(self) -> &'static str {
        match self {
            ProfileRow::EditName => "Edit Name",
            ProfileRow::EditBio => "Edit Bio",
            ProfileRow::ChangeAvatar => "Change Avatar",
            ProfileRow::Notifications => "Notifications",
            ProfileRow::Privacy => "Privacy",
            ProfileRow::Language => "Language",
            ProfileRow::LogOut => "Log Out",
        }
    }

    /// Rows offered in a tree; Notifications only where that screen exists.
    pub fn rows_for(nav: NavState) -> Vec<ProfileRow> {
        let mut rows = vec![
            ProfileRow::EditName,
            ProfileRow::EditBio,
            ProfileRow::ChangeAvatar,
        ];
        if nav.contains(Screen::Notifications) {
            rows.push(ProfileRow::Notifications);
        }
        rows.extend([ProfileRow::Privacy, ProfileRow::Language, ProfileRow::LogOut]);
        rows
    }
}

/// Profile details. Edits stay on this device; the backend has no
/// profile endpoint.
#[derive(Debug)]
pub struct ProfileState {
    pub name: String,
    pub bio: String,
    pub avatar: Option<MediaAsset>,
    pub selected: usize,
    pub editing: Option<ProfileField>,
    pub draft: String,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: None,
            selected: 0,
            editing: None,
            draft: String::new(),
        }
    }
}

impl ProfileState {
    /// Fresh profile for a newly mounted tree.
    pub fn for_user(display_name: Option<&str>) -> Self {
        Self {
            name: display_name.unwrap_or(DEFAULT_NAME).to_string(),
            ..Self::default()
        }
    }

    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}
