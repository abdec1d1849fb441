// Stores layer - Data access and repository pattern
pub mod trail_store;
pub mod user_store;

pub use trail_store::TrailStore;
pub use user_store::UserStore;
