mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use renewal_reminder_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use crate::Context;
    use renewal_reminder_domain::{Entity, User};

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = Context::create_inmemory();
        let user = User::new("Rania".into(), "rania@example.com".into());

        assert!(ctx.repos.users.insert(&user).await.is_ok());

        let res = ctx.repos.users.find(&user.id).await.unwrap();
        assert!(res.eq(&user));
        assert_eq!(res.name, "Rania");

        let res = ctx.repos.users.delete(&user.id).await;
        assert!(res.is_some());
        assert!(ctx.repos.users.find(&user.id).await.is_none());
    }
}
