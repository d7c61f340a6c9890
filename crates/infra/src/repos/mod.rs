mod event;
mod notification;
mod shared;
mod user;

pub use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
pub use notification::{INotificationRepo, InMemoryNotificationRepo, PostgresNotificationRepo};
pub use shared::repo::DeleteResult;
use sqlx::PgPool;
use std::sync::Arc;
pub use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            notifications: Arc::new(PostgresNotificationRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        let users: Arc<dyn IUserRepo> = Arc::new(InMemoryUserRepo::new());
        Self {
            events: Arc::new(InMemoryEventRepo::new(users.clone())),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
            users,
        }
    }
}
