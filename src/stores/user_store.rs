use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::types::db::user::{self, ActiveModel, Entity as User};
use crate::types::internal::{NewUser, TrailList, TrailListKind, UserRecord};

/// Persistence for user accounts and their trail lists
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new account with empty trail lists
    ///
    /// # Errors
    /// * `CredentialError::DuplicateEmail` - the unique email index rejected the row
    pub async fn insert_user(&self, new_user: NewUser) -> Result<UserRecord, InternalError> {
        let email = new_user.email.clone();
        let empty = encode_list(&TrailList::new())?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            avatar: Set(new_user.avatar),
            bookmarked_trails: Set(empty.clone()),
            completed_trails: Set(empty),
            created_at: Set(Utc::now().timestamp()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                InternalError::from(CredentialError::DuplicateEmail { email })
            }
            _ => InternalError::database("insert_user", e),
        })?;

        tracing::debug!(user_id = %model.id, "User inserted");

        UserRecord::try_from(model)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, InternalError> {
        let model = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))?;

        model.map(UserRecord::try_from).transpose()
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, InternalError> {
        let model = User::find_by_id(user_id.to_owned())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_id", e))?;

        model.map(UserRecord::try_from).transpose()
    }

    /// Remove the account. Returns whether a row was deleted.
    pub async fn delete_user(&self, user_id: &str) -> Result<bool, InternalError> {
        let result = User::delete_by_id(user_id.to_owned())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_user", e))?;

        Ok(result.rows_affected > 0)
    }

    /// Overwrite one of the user's trail lists
    ///
    /// # Errors
    /// * `CredentialError::UserIdNotFound` - no row matched `user_id`
    pub async fn update_trail_list(
        &self,
        user_id: &str,
        kind: TrailListKind,
        list: &TrailList,
    ) -> Result<(), InternalError> {
        let column = match kind {
            TrailListKind::Bookmarked => user::Column::BookmarkedTrails,
            TrailListKind::Completed => user::Column::CompletedTrails,
        };

        let result = User::update_many()
            .col_expr(column, Expr::value(encode_list(list)?))
            .filter(user::Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_trail_list", e))?;

        if result.rows_affected == 0 {
            return Err(CredentialError::UserIdNotFound {
                user_id: user_id.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn encode_list(list: &TrailList) -> Result<String, InternalError> {
    serde_json::to_string(list).map_err(|e| InternalError::parse("trail list", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_db;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Alex".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            avatar: "https://img/avatar.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_user_starts_with_empty_lists() {
        let store = UserStore::new(setup_test_db().await);

        let user = store.insert_user(new_user("a@x.com")).await.unwrap();

        assert!(Uuid::parse_str(&user.id).is_ok());
        assert_eq!(user.email, "a@x.com");
        assert!(user.bookmarked.is_empty());
        assert!(user.completed.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_by_index() {
        let store = UserStore::new(setup_test_db().await);
        store.insert_user(new_user("a@x.com")).await.unwrap();

        let result = store.insert_user(new_user("a@x.com")).await;

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::DuplicateEmail { .. }))
        ));
    }

    #[tokio::test]
    async fn test_find_by_email_and_id() {
        let store = UserStore::new(setup_test_db().await);
        let inserted = store.insert_user(new_user("a@x.com")).await.unwrap();

        let by_email = store.find_by_email("a@x.com").await.unwrap().unwrap();
        let by_id = store.find_by_id(&inserted.id).await.unwrap().unwrap();

        assert_eq!(by_email, inserted);
        assert_eq!(by_id, inserted);
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
        assert!(store.find_by_id("not-a-uuid").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_trail_list_persists_order() {
        let store = UserStore::new(setup_test_db().await);
        let user = store.insert_user(new_user("a@x.com")).await.unwrap();
        let mut list = TrailList::new();
        list.add("t1");
        list.add("t2");

        store
            .update_trail_list(&user.id, TrailListKind::Completed, &list)
            .await
            .unwrap();

        let reloaded = store.find_by_id(&user.id).await.unwrap().unwrap();
        let ids: Vec<&str> = reloaded.completed.iter().map(|r| r.trail.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1"]);
        assert!(reloaded.bookmarked.is_empty());
    }

    #[tokio::test]
    async fn test_update_trail_list_for_missing_user() {
        let store = UserStore::new(setup_test_db().await);

        let result = store
            .update_trail_list("missing", TrailListKind::Bookmarked, &TrailList::new())
            .await;

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::UserIdNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_delete_user_reports_whether_row_existed() {
        let store = UserStore::new(setup_test_db().await);
        let user = store.insert_user(new_user("a@x.com")).await.unwrap();

        assert!(store.delete_user(&user.id).await.unwrap());
        assert!(!store.delete_user(&user.id).await.unwrap());
        assert!(store.find_by_id(&user.id).await.unwrap().is_none());
    }
}
