use clipdeck_core::models::Video;

/// Video list shown on Home.
#[derive(Debug, Default)]
pub struct FeedState {
    pub videos: Vec<Video>,
    pub selected: usize,
    /// A fetch has completed at least once (successfully or not).
    pub loaded: bool,
    pub error: Option<String>,
}

impl FeedState {
    pub fn selected_video(&self) -> Option<&Video> {
        self.videos.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.videos.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Replaces the list, keeping the selection on the same video id when
    /// it is still present.
    pub fn replace(&mut self, videos: Vec<Video>) {
        let selected_id = self.selected_video().map(|v| v.id.clone());
        self.videos = videos;
        self.selected = selected_id
            .and_then(|id| self.videos.iter().position(|v| v.id == id))
            .unwrap_or(0);
        self.loaded = true;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            ..Video::default()
        }
    }

    #[test]
    fn test_replace_keeps_selected_id() {
        let mut feed = FeedState::default();
        feed.replace(vec![video("1"), video("2"), video("3")]);
        feed.select_next();
        feed.select_next();

        feed.replace(vec![video("3"), video("4")]);
        assert_eq!(feed.selected_video().map(|v| v.id.as_str()), Some("3"));

        feed.replace(vec![video("9")]);
        assert_eq!(feed.selected, 0);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut feed = FeedState::default();
        feed.select_prev();
        feed.select_next();
        assert_eq!(feed.selected, 0);
        assert!(feed.selected_video().is_none());
    }
}
