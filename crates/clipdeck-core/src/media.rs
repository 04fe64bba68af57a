//! Local media: picking files for upload and writing playback files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::models::Video;

/// Kind of file a picker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Video => "video/",
            MediaKind::Image => "image/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
        }
    }
}

/// A picked file, loaded into memory for a multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for MediaAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaAsset")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl MediaAsset {
    /// Reads `path` and checks it is a `kind` file.
    ///
    /// The MIME type is sniffed from the content and falls back to the
    /// file extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is the wrong kind.
    pub fn load(path: &Path, kind: MediaKind) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        if bytes.is_empty() {
            bail!("{} is empty", path.display());
        }

        let mime_type = infer::get(&bytes)
            .map(|t| t.mime_type())
            .or_else(|| mime_type_for_extension(path))
            .unwrap_or("application/octet-stream");
        if !mime_type.starts_with(kind.mime_prefix()) {
            bail!(
                "{} is not a {} file (detected {mime_type})",
                path.display(),
                kind.label()
            );
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or_else(|| format!("upload.{}", kind.label()), ToString::to_string);

        Ok(Self {
            file_name,
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    pub fn size_label(&self) -> String {
        let len = self.bytes.len() as f64;
        if len >= 1024.0 * 1024.0 {
            format!("{:.1} MB", len / (1024.0 * 1024.0))
        } else if len >= 1024.0 {
            format!("{:.1} KB", len / 1024.0)
        } else {
            format!("{} B", self.bytes.len())
        }
    }
}

/// Normalizes user-provided file paths.
///
/// Handles common drag-and-drop shell escaping (`\ `, `\(`, `\)`), strips
/// surrounding quotes, and expands `~/` to the home directory.
#[must_use]
pub fn normalize_input_path(path: &str) -> PathBuf {
    let trimmed = path.trim().trim_matches(|c| c == '\'' || c == '"');
    let unescaped = trimmed
        .replace("\\ ", " ")
        .replace("\\(", "(")
        .replace("\\)", ")");

    if let Some(rest) = unescaped.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    PathBuf::from(unescaped)
}

/// Returns a MIME type inferred from the file extension.
fn mime_type_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|e| e.to_str())?;

    match ext.to_ascii_lowercase().as_str() {
        "mp4" | "m4v" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        "webm" => Some("video/webm"),
        "mkv" => Some("video/x-matroska"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Decodes a video's inline payload into `cache_dir` for the system player.
///
/// # Errors
/// Returns an error if the video carries no payload, the payload is not
/// base64, or the file cannot be written.
pub fn write_playback_file(cache_dir: &Path, video: &Video) -> Result<PathBuf> {
    let Some(bytes) = video.decode_video_data()? else {
        bail!("Video {} has no playable data", video.id);
    };

    let extension = infer::get(&bytes)
        .filter(|t| t.mime_type().starts_with("video/"))
        .map_or("mp4", |t| t.extension());
    let safe_id: String = video
        .id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let file_name = if safe_id.is_empty() {
        format!("video.{extension}")
    } else {
        format!("video-{safe_id}.{extension}")
    };

    fs::create_dir_all(cache_dir)
        .with_context(|| format!("Failed to create directory {}", cache_dir.display()))?;
    let path = cache_dir.join(file_name);
    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote playback file");
    Ok(path)
}
