//! User service - composes users with their addresses.
//!
//! Reads run on the pool. Every write runs inside one transaction so a user
//! row never commits without its address row.

use async_trait::async_trait;
use std::sync::Arc;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use common::AppResult;
use domain::{format_address_line, normalize_phone, User, UserQueryOptions};

use crate::infra::Persistence;
use crate::repository::{AddressStore, UserStore};

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// One user with its address. Fails when either lookup fails.
    async fn get(&self, opts: UserQueryOptions) -> AppResult<User>;

    /// Active users without addresses, optionally filtered by email
    async fn select(&self, opts: UserQueryOptions) -> AppResult<Vec<User>>;

    /// Every user with its address, one lookup per user. Stops at the first
    /// missing address.
    async fn all(&self) -> AppResult<Vec<User>>;

    /// Users that have an address, fetched in a single joined query
    async fn users_with_address(&self) -> AppResult<Vec<User>>;

    /// Insert a user and its address atomically
    async fn create(&self, user: User) -> AppResult<User>;

    /// Update a user and its address atomically
    async fn update(&self, user: User) -> AppResult<User>;

    /// Soft delete the user row. The address row is kept.
    async fn delete(&self, user: User) -> AppResult<()>;
}

/// Concrete implementation of UserService on top of the stores.
pub struct UserManager {
    persistence: Arc<Persistence>,
}

impl UserManager {
    pub fn new(persistence: Arc<Persistence>) -> Self {
        Self { persistence }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get(&self, opts: UserQueryOptions) -> AppResult<User> {
        let db = self.persistence.connection();
        let user = UserStore::new(db).get(&opts).await?;
        let address = AddressStore::new(db).find(user.id).await?;
        Ok(user.with_address(address))
    }

    async fn select(&self, opts: UserQueryOptions) -> AppResult<Vec<User>> {
        UserStore::new(self.persistence.connection()).select(&opts).await
    }

    async fn all(&self) -> AppResult<Vec<User>> {
        let db = self.persistence.connection();
        let users = UserStore::new(db).all().await?;

        // N+1 on purpose: each user must resolve its own address
        let addresses = AddressStore::new(db);
        let mut result = Vec::with_capacity(users.len());
        for user in users {
            let address = addresses.find(user.id).await?;
            result.push(user.with_address(address));
        }
        Ok(result)
    }

    async fn users_with_address(&self) -> AppResult<Vec<User>> {
        UserStore::new(self.persistence.connection())
            .users_with_address()
            .await
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.phone = normalize_phone(&user.phone);

        self.persistence
            .transaction(move |txn| {
                Box::pin(async move {
                    let created = UserStore::new(txn).create(&user).await?;

                    let mut address = user.take_address()?;
                    address.address_line = format_address_line(&address.address_line);
                    address.user_id = created.id;
                    let address = AddressStore::new(txn).create(&address).await?;

                    tracing::info!(user_id = %created.id, "User created");
                    Ok(created.with_address(address))
                })
            })
            .await
    }

    async fn update(&self, mut user: User) -> AppResult<User> {
        self.persistence
            .transaction(move |txn| {
                Box::pin(async move {
                    let updated = UserStore::new(txn).update(&user).await?;

                    let mut address = user.take_address()?;
                    address.address_line = format_address_line(&address.address_line);
                    address.user_id = updated.id;
                    let address = AddressStore::new(txn).update(&address).await?;

                    tracing::info!(user_id = %updated.id, "User updated");
                    Ok(updated.with_address(address))
                })
            })
            .await
    }

    async fn delete(&self, user: User) -> AppResult<()> {
        let id = user.id;
        self.persistence
            .transaction(move |txn| Box::pin(async move { UserStore::new(txn).delete(id).await }))
            .await?;

        tracing::info!(user_id = %id, "User soft deleted");
        Ok(())
    }
}
