use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::user::IUserRepo;
use flowerstation_domain::{Event, EventWithOwner, ReminderWindow, ID};
use std::sync::Arc;

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
    users: Arc<dyn IUserRepo>,
}

impl InMemoryEventRepo {
    /// The user repo is used to join events with their owners
    pub fn new(users: Arc<dyn IUserRepo>) -> Self {
        Self {
            events: std::sync::Mutex::new(vec![]),
            users,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        let updated = update_many(
            &self.events,
            |stored| stored.id == e.id,
            |stored| {
                let reminder_sent = stored.reminder_sent;
                *stored = e.clone();
                stored.reminder_sent = reminder_sent;
            },
        );
        if updated == 0 {
            anyhow::bail!("Event {} does not exist", e.id);
        }
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn find_many(&self, event_ids: &[ID]) -> Vec<Event> {
        find_by(&self.events, |e| event_ids.contains(&e.id))
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Event> {
        let mut events = find_by(&self.events, |e| e.user_id == *user_id);
        events.sort_by_key(|e| e.date_ts);
        events
    }

    async fn find_unreminded(&self, window: &ReminderWindow) -> anyhow::Result<Vec<EventWithOwner>> {
        let events = find_by(&self.events, |e| e.needs_reminder(window));
        let mut joined = Vec::with_capacity(events.len());
        for event in events {
            let owner = self.users.find(&event.user_id).await;
            joined.push(EventWithOwner { event, owner });
        }
        Ok(joined)
    }

    async fn set_reminded(&self, event_id: &ID) -> anyhow::Result<()> {
        let updated = update_many(&self.events, |e| e.id == *event_id, |e| e.mark_reminded());
        if updated == 0 {
            anyhow::bail!("Event {} does not exist", event_id);
        }
        Ok(())
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }
}
