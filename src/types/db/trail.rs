use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trails")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub name: String,
    pub location: String,
    pub coordinates: String,
    pub difficulty: String,
    pub length: String,
    pub elevation_gain: String,
    pub image_link: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,

    // JSON array of strings
    #[sea_orm(column_type = "Text")]
    pub tags: String,

    // JSON array of embedded comments, newest first
    #[sea_orm(column_type = "Text")]
    pub comments: String,

    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
