use clipdeck_core::forms::UploadForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminField {
    #[default]
    Title,
    Description,
    Video,
    Thumbnail,
    Upload,
    Logout,
}

impl AdminField {
    pub const ALL: [AdminField; 6] = [
        AdminField::Title,
        AdminField::Description,
        AdminField::Video,
        AdminField::Thumbnail,
        AdminField::Upload,
        AdminField::Logout,
    ];

    pub fn is_text(self) -> bool {
        matches!(self, AdminField::Title | AdminField::Description)
    }
}

#[derive(Debug, Default)]
pub struct AdminState {
    pub form: UploadForm,
    pub focus: AdminField,
}
