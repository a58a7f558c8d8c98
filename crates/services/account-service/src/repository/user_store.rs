//! User store with soft delete support.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::address::Entity as AddressEntity;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{User, UserQueryOptions};

/// Data access for the `users` table.
///
/// Borrows whichever executor the caller picked: the pooled connection for
/// plain reads, or an open transaction for composite writes.
pub struct UserStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserStore<'a, C> {
    /// Create new store on top of an executor
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find one user matching every set filter, deleted or not.
    ///
    /// When several rows match (e.g. by name) the first row returned by the
    /// backend wins.
    pub async fn get(&self, opts: &UserQueryOptions) -> AppResult<User> {
        let condition = Condition::all()
            .add_option(opts.parsed_id()?.map(|id| user::Column::Id.eq(id)))
            .add_option(opts.email.as_deref().map(|v| user::Column::Email.eq(v)))
            .add_option(opts.first_name.as_deref().map(|v| user::Column::FirstName.eq(v)))
            .add_option(opts.last_name.as_deref().map(|v| user::Column::LastName.eq(v)));

        let model = UserEntity::find()
            .filter(condition)
            .one(self.db)
            .await
            .map_err(AppError::from_user_store)?
            .ok_or_not_found()?;

        tracing::debug!(user_id = %model.id, "User found");
        Ok(User::from(model))
    }

    /// List active users, optionally narrowed by email. Only the email
    /// filter applies here.
    pub async fn select(&self, opts: &UserQueryOptions) -> AppResult<Vec<User>> {
        let mut query = UserEntity::find().filter(user::Column::DeletedAt.is_null());
        if let Some(email) = opts.email.as_deref() {
            query = query.filter(user::Column::Email.eq(email));
        }

        let models = query.all(self.db).await.map_err(AppError::from_user_store)?;
        Ok(models.into_iter().map(User::from).collect())
    }

    /// List every user, soft-deleted ones included.
    pub async fn all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(self.db)
            .await
            .map_err(AppError::from_user_store)?;

        tracing::debug!(count = models.len(), "Loaded all users");
        Ok(models.into_iter().map(User::from).collect())
    }

    /// Users joined with their address in one query.
    ///
    /// Inner join: users without an address row are left out.
    pub async fn users_with_address(&self) -> AppResult<Vec<User>> {
        let rows = UserEntity::find()
            .inner_join(AddressEntity)
            .select_also(AddressEntity)
            .all(self.db)
            .await
            .map_err(AppError::from_user_store)?;

        Ok(rows
            .into_iter()
            .filter_map(|(model, address)| {
                address.map(|address| {
                    let mut user = User::from(model);
                    user.address = Some(address.into());
                    user
                })
            })
            .collect())
    }

    /// Insert a user; the identifier is assigned by the database.
    pub async fn create(&self, user: &User) -> AppResult<User> {
        let active_model = ActiveModel {
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            phone: Set(user.phone.clone()),
            birthdate: Set(user.birthdate),
            ..Default::default()
        };

        let model = active_model
            .insert(self.db)
            .await
            .map_err(AppError::from_user_store)?;

        tracing::debug!(user_id = %model.id, "User created");
        Ok(User::from(model))
    }

    /// Overwrite the mutable columns of the user with the same id.
    pub async fn update(&self, user: &User) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            phone: Set(user.phone.clone()),
            birthdate: Set(user.birthdate),
            ..Default::default()
        };

        let model = active_model
            .update(self.db)
            .await
            .map_err(AppError::from_user_store)?;

        Ok(User::from(model))
    }

    /// Soft delete: stamp `deleted_at`. A missing row is not an error.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::update_many()
            .col_expr(user::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(id))
            .exec(self.db)
            .await
            .map_err(AppError::from_user_store)?;

        if result.rows_affected == 0 {
            tracing::debug!(user_id = %id, "Soft delete matched no user");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::{address_model, executed, user_model};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_get_by_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(Uuid::new_v4(), "louane.vidal@example.com")]])
            .into_connection();

        let opts = UserQueryOptions::new().email("louane.vidal@example.com");
        let user = UserStore::new(&db).get(&opts).await.unwrap();
        assert_eq!(user.first_name, "louane");
        assert!(user.address.is_none());

        let log = executed(&db);
        assert_eq!(log.len(), 1);
        assert!(log[0].sql.contains(r#""users"."email" = $1"#));
        assert!(!log[0].sql.contains("deleted_at\" IS NULL"));
    }

    #[tokio::test]
    async fn test_get_combines_filters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(Uuid::new_v4(), "a@example.com")]])
            .into_connection();

        let opts = UserQueryOptions::new().first_name("louane").last_name("vidal");
        UserStore::new(&db).get(&opts).await.unwrap();

        let sql = &executed(&db)[0].sql;
        assert!(sql.contains(r#""users"."first_name" = $1 AND "users"."last_name" = $2"#));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let result = UserStore::new(&db)
            .get(&UserQueryOptions::new().email("nobody@example.com"))
            .await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_get_malformed_id_skips_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = UserStore::new(&db).get(&UserQueryOptions::new().id("42")).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
        assert!(executed(&db).is_empty());
    }

    #[tokio::test]
    async fn test_get_ambiguous_match_returns_first_row() {
        let first = user_model(Uuid::new_v4(), "first@example.com");
        let second = user_model(Uuid::new_v4(), "second@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![first.clone(), second]])
            .into_connection();

        let user = UserStore::new(&db)
            .get(&UserQueryOptions::new().first_name("louane"))
            .await
            .unwrap();
        assert_eq!(user.id, first.id);
    }

    #[tokio::test]
    async fn test_select_excludes_deleted_and_filters_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(Uuid::new_v4(), "louane.vidal@example.com")]])
            .into_connection();

        let users = UserStore::new(&db)
            .select(&UserQueryOptions::new().email("louane.vidal@example.com").first_name("ignored"))
            .await
            .unwrap();
        assert_eq!(users.len(), 1);

        let sql = &executed(&db)[0].sql;
        assert!(sql.contains(r#""users"."deleted_at" IS NULL"#));
        assert!(sql.contains(r#""users"."email" = $1"#));
        assert!(!sql.contains("first_name\" ="));
    }

    #[tokio::test]
    async fn test_all_has_no_deletion_filter() {
        let mut deleted = user_model(Uuid::new_v4(), "gone@example.com");
        deleted.deleted_at = Some(Utc::now());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(Uuid::new_v4(), "a@example.com"), deleted]])
            .into_connection();

        let users = UserStore::new(&db).all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[1].is_deleted());
        assert!(!executed(&db)[0].sql.contains("WHERE"));
    }

    #[tokio::test]
    async fn test_users_with_address_uses_single_join() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(user_model(id, "a@example.com"), address_model(id))]])
            .into_connection();

        let users = UserStore::new(&db).users_with_address().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].address.as_ref().map(|a| a.user_id), Some(id));

        let log = executed(&db);
        assert_eq!(log.len(), 1);
        assert!(log[0].sql.contains("INNER JOIN \"addresses\""));
    }

    #[tokio::test]
    async fn test_create_returns_server_id() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(id, "louane.vidal@example.com")]])
            .into_connection();

        let input = User::from(user_model(Uuid::nil(), "louane.vidal@example.com"));
        let created = UserStore::new(&db).create(&input).await.unwrap();
        assert_eq!(created.id, id);
        assert!(executed(&db)[0].sql.starts_with("INSERT INTO \"users\""));
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([common::testing::pg_error("23505")])
            .into_connection();

        let input = User::from(user_model(Uuid::nil(), "dup@example.com"));
        let result = UserStore::new(&db).create(&input).await;
        assert!(matches!(result.unwrap_err(), AppError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let input = User::from(user_model(Uuid::new_v4(), "a@example.com"));
        let result = UserStore::new(&db).update(&input).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        UserStore::new(&db).delete(Uuid::new_v4()).await.unwrap();

        let sql = &executed(&db)[0].sql;
        assert!(sql.starts_with("UPDATE \"users\" SET \"deleted_at\""));
    }

    #[tokio::test]
    async fn test_delete_propagates_backend_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = UserStore::new(&db).delete(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), AppError::Database(_)));
    }
}
