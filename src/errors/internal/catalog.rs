use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Trail not found: {trail_id}")]
    TrailNotFound { trail_id: String },

    #[error("Comment not found: {comment_id}")]
    CommentNotFound { comment_id: String },

    #[error("User {user_id} is not the author of comment {comment_id}")]
    NotCommentAuthor { comment_id: String, user_id: String },
}
