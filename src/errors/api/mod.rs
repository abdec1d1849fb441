// API-facing error types
pub mod auth;
pub mod request;
pub mod trail;
pub mod user;

// Re-exports for convenience
pub use auth::AuthError;
pub use request::RequestError;
pub use trail::TrailError;
pub use user::UserError;

#[cfg(test)]
mod auth_test;
