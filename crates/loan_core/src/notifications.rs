//! Notification inbox and the recent activity feed shown on the dashboard.

use crate::dashboard::ymd;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Payment,
    Application,
    System,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub read: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    #[must_use]
    pub const fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// The inbox every new session starts with.
    #[must_use]
    pub fn sample() -> Self {
        let entry = |id: &str, kind, title: &str, message: &str, day, read| Notification {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            date: ymd(2023, 6, day),
            read,
        };
        Self::new(vec![
            entry(
                "1",
                NotificationKind::Payment,
                "Payment Due",
                "Your next payment of Le 250 is due in 3 days",
                15,
                false,
            ),
            entry(
                "2",
                NotificationKind::Application,
                "Application Update",
                "Your loan application has been approved",
                10,
                true,
            ),
            entry(
                "3",
                NotificationKind::System,
                "System Maintenance",
                "The system will be down for maintenance on Sunday",
                8,
                false,
            ),
            entry(
                "4",
                NotificationKind::Document,
                "Document Required",
                "Please upload your latest income statement",
                5,
                true,
            ),
        ])
    }

    /// Marks the notification with `id` as read. Returns whether anything
    /// changed; unknown or already read ids are left alone.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.read => {
                debug!(id, "notification marked read");
                item.read = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a NotificationFeed {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub description: String,
    pub timestamp: NaiveDateTime,
    pub kind: NotificationKind,
}

/// Newest first.
#[must_use]
pub fn recent_activities() -> Vec<Activity> {
    [
        ("Payment of Le 250 processed successfully", 15, (10, 30), NotificationKind::Payment),
        ("NASSIT pension deduction setup completed", 14, (14, 45), NotificationKind::System),
        ("University confirmed enrollment for Sarah Doe", 12, (9, 15), NotificationKind::Application),
        ("Income verification document uploaded", 10, (16, 20), NotificationKind::Document),
        ("Payment schedule updated for next semester", 8, (11, 5), NotificationKind::System),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (description, day, (hour, minute), kind))| Activity {
        id: (index + 1).to_string(),
        description: description.to_string(),
        timestamp: ymd(2023, 6, day)
            .and_hms_opt(hour, minute, 0)
            .unwrap_or_default(),
        kind,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_read_flips_only_the_matching_record() {
        let mut feed = NotificationFeed::sample();
        assert_eq!(feed.unread_count(), 2);

        assert!(feed.mark_read("3"));
        assert_eq!(feed.unread_count(), 1);
        let read: Vec<_> = feed.iter().map(|n| n.read).collect();
        assert_eq!(read, [false, true, true, true]);

        assert!(!feed.mark_read("3"));
        assert!(!feed.mark_read("99"));
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn activities_are_newest_first() {
        let activities = recent_activities();
        assert_eq!(activities.len(), 5);
        assert!(
            activities
                .windows(2)
                .all(|pair| pair[0].timestamp > pair[1].timestamp)
        );
        assert_eq!(activities[1].description, "NASSIT pension deduction setup completed");
    }
}
