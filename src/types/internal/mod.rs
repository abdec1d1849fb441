// Internal types - never exposed over the API directly
pub mod auth;
pub mod context;
pub mod trail;
pub mod trail_list;
pub mod user;

pub use context::{RequestContext, RequestId};
pub use trail::{Comment, CommentThread, NewTrail, TrailRecord};
pub use trail_list::{TrailList, TrailListKind, TrailRef};
pub use user::{NewUser, UserRecord};
