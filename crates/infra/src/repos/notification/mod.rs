mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use flowerstation_domain::{Notification, ID};
pub use inmemory::InMemoryNotificationRepo;
pub use postgres::PostgresNotificationRepo;

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    /// The newest notifications of the user, at most `limit` of them
    async fn find_by_user(&self, user_id: &ID, limit: usize) -> Vec<Notification>;
    async fn count_unread(&self, user_id: &ID) -> anyhow::Result<i64>;
    /// Marks the notification as read if it belongs to the user.
    /// Returns the number of notifications updated.
    async fn mark_read(&self, notification_id: &ID, user_id: &ID) -> anyhow::Result<u64>;
    /// Returns the number of notifications updated
    async fn mark_all_read(&self, user_id: &ID) -> anyhow::Result<u64>;
    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult>;
}
