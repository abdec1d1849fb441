// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{AuthError, RequestError, TrailError, UserError};
pub use internal::InternalError;

#[cfg(test)]
mod internal_test;
