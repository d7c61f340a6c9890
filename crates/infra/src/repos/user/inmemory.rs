use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use flowerstation_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        if !find_by(&self.users, |u| u.email.eq_ignore_ascii_case(&user.email)).is_empty() {
            anyhow::bail!("A user with email {} already exists", user.email);
        }
        insert(user, &self.users);
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        if !save(user, &self.users) {
            anyhow::bail!("User {} does not exist", user.id);
        }
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        find_by(&self.users, |u| u.email.eq_ignore_ascii_case(email))
            .into_iter()
            .next()
    }
}
