use super::IEventRepo;
use flowerstation_domain::{Event, EventType, EventWithOwner, ReminderWindow, User, UserSettings, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::{TryFrom, TryInto};
use tracing::error;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    user_uid: Uuid,
    title: String,
    description: Option<String>,
    date_ts: i64,
    event_time: Option<String>,
    location: Option<String>,
    event_type: String,
    custom_type: Option<String>,
    attendees: Vec<String>,
    reminder_sent: bool,
    created: i64,
    updated: i64,
}

#[derive(Debug, FromRow)]
struct EventWithOwnerRaw {
    #[sqlx(flatten)]
    event: EventRaw,
    owner_uid: Option<Uuid>,
    owner_name: Option<String>,
    owner_email: Option<String>,
    owner_password_hash: Option<String>,
    owner_email_notifications: Option<bool>,
    owner_created: Option<i64>,
}

impl TryFrom<EventRaw> for Event {
    type Error = anyhow::Error;

    fn try_from(raw: EventRaw) -> anyhow::Result<Self> {
        let event_type = EventType::parse(&raw.event_type, raw.custom_type.as_deref())?;
        Ok(Self {
            id: raw.event_uid.into(),
            title: raw.title,
            description: raw.description,
            date_ts: raw.date_ts,
            time: raw.event_time,
            location: raw.location,
            event_type,
            user_id: raw.user_uid.into(),
            attendees: raw.attendees,
            reminder_sent: raw.reminder_sent,
            created: raw.created,
            updated: raw.updated,
        })
    }
}

impl TryFrom<EventWithOwnerRaw> for EventWithOwner {
    type Error = anyhow::Error;

    fn try_from(raw: EventWithOwnerRaw) -> anyhow::Result<Self> {
        let owner = match (raw.owner_uid, raw.owner_email) {
            (Some(owner_uid), Some(email)) => Some(User {
                id: owner_uid.into(),
                name: raw.owner_name.unwrap_or_default(),
                email,
                password_hash: raw.owner_password_hash,
                settings: UserSettings {
                    email_notifications: raw.owner_email_notifications.unwrap_or(true),
                },
                created: raw.owner_created.unwrap_or_default(),
            }),
            _ => None,
        };
        Ok(Self {
            event: raw.event.try_into()?,
            owner,
        })
    }
}

fn into_events(rows: Vec<EventRaw>) -> Vec<Event> {
    rows.into_iter()
        .filter_map(|raw| {
            let event_uid = raw.event_uid;
            match Event::try_from(raw) {
                Ok(e) => Some(e),
                Err(e) => {
                    error!("Stored event {} is invalid: {:?}", event_uid, e);
                    None
                }
            }
        })
        .collect()
}

fn into_events_with_owner(rows: Vec<EventWithOwnerRaw>) -> Vec<EventWithOwner> {
    rows.into_iter()
        .filter_map(|raw| {
            let event_uid = raw.event.event_uid;
            match EventWithOwner::try_from(raw) {
                Ok(e) => Some(e),
                Err(e) => {
                    error!(
                        "Stored event {} is invalid, skipping reminder: {:?}",
                        event_uid, e
                    );
                    None
                }
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events(
                event_uid,
                user_uid,
                title,
                description,
                date_ts,
                event_time,
                location,
                event_type,
                custom_type,
                attendees,
                reminder_sent,
                created,
                updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(e.user_id.inner_ref())
        .bind(&e.title)
        .bind(&e.description)
        .bind(e.date_ts)
        .bind(&e.time)
        .bind(&e.location)
        .bind(e.event_type.kind())
        .bind(e.event_type.custom_label())
        .bind(&e.attendees)
        .bind(e.reminder_sent)
        .bind(e.created)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE events SET
                title = $2,
                description = $3,
                date_ts = $4,
                event_time = $5,
                location = $6,
                event_type = $7,
                custom_type = $8,
                attendees = $9,
                updated = $10
            WHERE event_uid = $1
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.title)
        .bind(&e.description)
        .bind(e.date_ts)
        .bind(&e.time)
        .bind(&e.location)
        .bind(e.event_type.kind())
        .bind(e.event_type.custom_label())
        .bind(&e.attendees)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            anyhow::bail!("Event {} does not exist", e.id);
        }
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        let raw = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Unable to find event {}: {:?}", event_id, e);
            None
        })?;
        into_events(vec![raw]).pop()
    }

    async fn find_many(&self, event_ids: &[ID]) -> Vec<Event> {
        let ids = event_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let rows = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.event_uid = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Unable to find events: {:?}", e);
            vec![]
        });
        into_events(rows)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Event> {
        let rows = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.user_uid = $1
            ORDER BY e.date_ts ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Unable to find events of user {}: {:?}", user_id, e);
            vec![]
        });
        into_events(rows)
    }

    async fn find_unreminded(&self, window: &ReminderWindow) -> anyhow::Result<Vec<EventWithOwner>> {
        let rows = sqlx::query_as::<_, EventWithOwnerRaw>(
            r#"
            SELECT e.*,
                u.user_uid AS owner_uid,
                u.name AS owner_name,
                u.email AS owner_email,
                u.password_hash AS owner_password_hash,
                u.email_notifications AS owner_email_notifications,
                u.created AS owner_created
            FROM events AS e
            LEFT JOIN users AS u ON u.user_uid = e.user_uid
            WHERE e.date_ts BETWEEN $1 AND $2
            AND e.reminder_sent = FALSE
            "#,
        )
        .bind(window.start())
        .bind(window.end())
        .fetch_all(&self.pool)
        .await?;

        Ok(into_events_with_owner(rows))
    }

    async fn set_reminded(&self, event_id: &ID) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE events
            SET reminder_sent = TRUE
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            anyhow::bail!("Event {} does not exist", event_id);
        }
        Ok(())
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        let raw = sqlx::query_as::<_, EventRaw>(
            r#"
            DELETE FROM events AS e
            WHERE e.event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Unable to delete event {}: {:?}", event_id, e);
            None
        })?;
        into_events(vec![raw]).pop()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn raw_event(event_type: &str, custom_type: Option<&str>) -> EventWithOwnerRaw {
        EventWithOwnerRaw {
            event: EventRaw {
                event_uid: Uuid::new_v4(),
                user_uid: Uuid::new_v4(),
                title: "Party".into(),
                description: None,
                date_ts: 0,
                event_time: None,
                location: None,
                event_type: event_type.into(),
                custom_type: custom_type.map(String::from),
                attendees: vec!["b@x.com".into()],
                reminder_sent: false,
                created: 0,
                updated: 0,
            },
            owner_uid: None,
            owner_name: None,
            owner_email: None,
            owner_password_hash: None,
            owner_email_notifications: None,
            owner_created: None,
        }
    }

    #[test]
    fn skips_undecodable_rows_for_reminders() {
        let valid = raw_event("Birthday", None);
        let valid_uid = valid.event.event_uid;
        let mut owned = raw_event("Other", Some("Graduation"));
        owned.owner_uid = Some(owned.event.user_uid);
        owned.owner_email = Some("a@x.com".into());
        let rows = vec![
            raw_event("Party", None),
            valid,
            raw_event("Other", None),
            owned,
        ];

        let events = into_events_with_owner(rows);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event.id, ID::from(valid_uid));
        assert!(events[0].owner.is_none());
        assert_eq!(events[1].owner_email(), Some("a@x.com"));
    }
}
