use chrono::{DateTime, Utc};
use clipdeck_core::models::{Notification, Video};

#[derive(Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub selected: usize,
}

impl NotificationsState {
    /// Rebuilds the list from the feed.
    ///
    /// Entries already seen keep their read flag and first-seen time.
    pub fn sync(&mut self, videos: &[Video], now: DateTime<Utc>) {
        let items = videos
            .iter()
            .map(|video| {
                let fresh = Notification::for_upload(video, now);
                match self.items.iter().find(|n| n.id == fresh.id) {
                    Some(existing) => Notification {
                        read: existing.read,
                        timestamp: existing.timestamp,
                        ..fresh
                    },
                    None => fresh,
                }
            })
            .collect::<Vec<_>>();
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_selected_read(&mut self) {
        if let Some(item) = self.items.get_mut(self.selected) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }
}
