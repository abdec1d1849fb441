use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::CatalogError;
use crate::types::db::trail::{self, ActiveModel, Entity as Trail};
use crate::types::internal::{CommentThread, NewTrail, TrailRecord};

/// Persistence for trails and their embedded comments
pub struct TrailStore {
    db: DatabaseConnection,
}

impl TrailStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a trail with an empty comment list
    pub async fn insert_trail(&self, new_trail: NewTrail) -> Result<TrailRecord, InternalError> {
        let tags = serde_json::to_string(&new_trail.tags)
            .map_err(|e| InternalError::parse("trail tags", e.to_string()))?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(new_trail.name),
            location: Set(new_trail.location),
            coordinates: Set(new_trail.coordinates),
            difficulty: Set(new_trail.difficulty),
            length: Set(new_trail.length),
            elevation_gain: Set(new_trail.elevation_gain),
            image_link: Set(new_trail.image_link),
            description: Set(new_trail.description),
            tags: Set(tags),
            comments: Set(encode_comments(&CommentThread::new())?),
            created_at: Set(Utc::now().timestamp()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("insert_trail", e))?;

        tracing::debug!(trail_id = %model.id, "Trail inserted");

        TrailRecord::try_from(model)
    }

    /// All trails, sorted by name ascending
    pub async fn list_by_name(&self) -> Result<Vec<TrailRecord>, InternalError> {
        Trail::find()
            .order_by_asc(trail::Column::Name)
            .order_by_asc(trail::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_trails", e))?
            .into_iter()
            .map(TrailRecord::try_from)
            .collect()
    }

    pub async fn find_by_id(&self, trail_id: &str) -> Result<Option<TrailRecord>, InternalError> {
        let model = Trail::find_by_id(trail_id.to_owned())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_trail_by_id", e))?;

        model.map(TrailRecord::try_from).transpose()
    }

    /// Overwrite the trail's comment list
    ///
    /// # Errors
    /// * `CatalogError::TrailNotFound` - no row matched `trail_id`
    pub async fn update_comments(
        &self,
        trail_id: &str,
        comments: &CommentThread,
    ) -> Result<(), InternalError> {
        let result = Trail::update_many()
            .col_expr(trail::Column::Comments, Expr::value(encode_comments(comments)?))
            .filter(trail::Column::Id.eq(trail_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_comments", e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::TrailNotFound {
                trail_id: trail_id.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn encode_comments(comments: &CommentThread) -> Result<String, InternalError> {
    serde_json::to_string(comments).map_err(|e| InternalError::parse("trail comments", e.to_string()))
}
