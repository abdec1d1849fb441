// Database entities - SeaORM models
pub mod trail;
pub mod user;
