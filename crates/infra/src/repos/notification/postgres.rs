use super::INotificationRepo;
use crate::repos::shared::repo::DeleteResult;
use flowerstation_domain::{Notification, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    user_uid: Uuid,
    event_uid: Uuid,
    message: String,
    read: bool,
    created: i64,
}

impl From<NotificationRaw> for Notification {
    fn from(raw: NotificationRaw) -> Self {
        Self {
            id: raw.notification_uid.into(),
            user_id: raw.user_uid.into(),
            event_id: raw.event_uid.into(),
            message: raw.message,
            read: raw.read,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications(notification_uid, user_uid, event_uid, message, read, created)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(notification.user_id.inner_ref())
        .bind(notification.event_id.inner_ref())
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID, limit: usize) -> Vec<Notification> {
        sqlx::query_as::<_, NotificationRaw>(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.user_uid = $1
            ORDER BY n.created DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Unable to find notifications of user {}: {:?}", user_id, e);
            vec![]
        })
        .into_iter()
        .map(|n| n.into())
        .collect()
    }

    async fn count_unread(&self, user_id: &ID) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM notifications AS n
            WHERE n.user_uid = $1 AND n.read = FALSE
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn mark_read(&self, notification_id: &ID, user_id: &ID) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE notifications
            SET read = TRUE
            WHERE notification_uid = $1 AND user_uid = $2 AND read = FALSE
            "#,
        )
        .bind(notification_id.inner_ref())
        .bind(user_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    async fn mark_all_read(&self, user_id: &ID) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE notifications
            SET read = TRUE
            WHERE user_uid = $1 AND read = FALSE
            "#,
        )
        .bind(user_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM notifications
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
