use super::INotificationRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use flowerstation_domain::{Notification, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID, limit: usize) -> Vec<Notification> {
        let mut notifications = find_by(&self.notifications, |n| n.user_id == *user_id);
        notifications.sort_by(|a, b| b.created.cmp(&a.created));
        notifications.truncate(limit);
        notifications
    }

    async fn count_unread(&self, user_id: &ID) -> anyhow::Result<i64> {
        Ok(count_by(&self.notifications, |n| {
            n.user_id == *user_id && !n.read
        }))
    }

    async fn mark_read(&self, notification_id: &ID, user_id: &ID) -> anyhow::Result<u64> {
        Ok(update_many(
            &self.notifications,
            |n| n.id == *notification_id && n.user_id == *user_id && !n.read,
            |n| n.mark_read(),
        ))
    }

    async fn mark_all_read(&self, user_id: &ID) -> anyhow::Result<u64> {
        Ok(update_many(
            &self.notifications,
            |n| n.user_id == *user_id && !n.read,
            |n| n.mark_read(),
        ))
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.notifications, |n| n.event_id == *event_id))
    }
}
