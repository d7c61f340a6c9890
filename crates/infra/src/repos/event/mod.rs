mod inmemory;
mod postgres;

use flowerstation_domain::{Event, EventWithOwner, ReminderWindow, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &Event) -> anyhow::Result<()>;
    /// Persists the editable fields of the event. `reminder_sent` is only
    /// ever changed through `set_reminded`.
    async fn save(&self, e: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<Event>;
    async fn find_many(&self, event_ids: &[ID]) -> Vec<Event>;
    /// All events owned by the user, earliest date first
    async fn find_by_user(&self, user_id: &ID) -> Vec<Event>;
    /// Events dated inside the window that have not been reminded yet,
    /// each joined with its owner
    async fn find_unreminded(&self, window: &ReminderWindow) -> anyhow::Result<Vec<EventWithOwner>>;
    async fn set_reminded(&self, event_id: &ID) -> anyhow::Result<()>;
    async fn delete(&self, event_id: &ID) -> Option<Event>;
}
