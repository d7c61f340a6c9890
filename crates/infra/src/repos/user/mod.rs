mod inmemory;
mod postgres;

use flowerstation_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use crate::StationContext;
    use flowerstation_domain::User;

    #[tokio::test]
    async fn finds_users_by_email_ignoring_case() {
        let ctx = StationContext::create_inmemory();
        let user = User::new("Ada".into(), "ada@example.com".into(), 0);
        ctx.repos.users.insert(&user).await.expect("To insert user");

        let found = ctx
            .repos
            .users
            .find_by_email("ADA@example.com")
            .await
            .expect("To find user by email");
        assert_eq!(found.id, user.id);
        assert!(ctx.repos.users.find_by_email("bob@example.com").await.is_none());
    }

    #[tokio::test]
    async fn saves_user_settings() {
        let ctx = StationContext::create_inmemory();
        let mut user = User::new("Ada".into(), "ada@example.com".into(), 0);
        ctx.repos.users.insert(&user).await.expect("To insert user");

        user.settings.email_notifications = false;
        ctx.repos.users.save(&user).await.expect("To save user");

        let found = ctx.repos.users.find(&user.id).await.expect("To find user");
        assert!(!found.settings.email_notifications);
    }
}
