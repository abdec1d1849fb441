use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::{CatalogError, CredentialError, ProfileError};
use crate::stores::{TrailStore, UserStore};
use crate::types::internal::context::RequestContext;
use crate::types::internal::{TrailList, TrailListKind};

/// Orchestrates account deletion and the bookmark/completed lists
pub struct ProfileCoordinator {
    user_store: Arc<UserStore>,
    trail_store: Arc<TrailStore>,
}

impl ProfileCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: app_data.user_store.clone(),
            trail_store: app_data.trail_store.clone(),
        }
    }

    /// Delete the caller's account
    ///
    /// Trails and comments written by the caller are left in place. Deleting
    /// an account that is already gone still succeeds.
    pub async fn delete_account(&self, ctx: &RequestContext) -> Result<(), InternalError> {
        let user_id = ctx.caller_id()?;

        let deleted = self.user_store.delete_user(user_id).await?;

        tracing::info!(request_id = %ctx.request_id, user_id = %user_id, deleted, "Account deleted");

        Ok(())
    }

    /// Insert `trail_id` at the head of the caller's `kind` list
    pub async fn add_to_list(
        &self,
        ctx: &RequestContext,
        kind: TrailListKind,
        trail_id: &str,
    ) -> Result<TrailList, InternalError> {
        self.update_list(ctx, kind, trail_id, ListChange::Add).await
    }

    /// Remove `trail_id` from the caller's `kind` list
    pub async fn remove_from_list(
        &self,
        ctx: &RequestContext,
        kind: TrailListKind,
        trail_id: &str,
    ) -> Result<TrailList, InternalError> {
        self.update_list(ctx, kind, trail_id, ListChange::Remove).await
    }

    async fn update_list(
        &self,
        ctx: &RequestContext,
        kind: TrailListKind,
        trail_id: &str,
        change: ListChange,
    ) -> Result<TrailList, InternalError> {
        let user_id = ctx.caller_id()?;

        if self.trail_store.find_by_id(trail_id).await?.is_none() {
            return Err(CatalogError::TrailNotFound {
                trail_id: trail_id.to_string(),
            }
            .into());
        }

        let mut user = self.user_store.find_by_id(user_id).await?.ok_or_else(|| {
            InternalError::from(CredentialError::UserIdNotFound {
                user_id: user_id.to_string(),
            })
        })?;

        let list = user.trail_list_mut(kind);
        match change {
            ListChange::Add => {
                if !list.add(trail_id) {
                    return Err(ProfileError::AlreadyListed {
                        kind,
                        trail_id: trail_id.to_string(),
                    }
                    .into());
                }
            }
            ListChange::Remove => {
                if !list.remove(trail_id) {
                    return Err(ProfileError::NotListed {
                        kind,
                        trail_id: trail_id.to_string(),
                    }
                    .into());
                }
            }
        }

        self.user_store
            .update_trail_list(user_id, kind, user.trail_list(kind))
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            user_id = %user_id,
            trail_id = %trail_id,
            list = %kind,
            "Trail list updated"
        );

        Ok(user.trail_list(kind).clone())
    }
}

#[derive(Debug, Clone, Copy)]
enum ListChange {
    Add,
    Remove,
}
