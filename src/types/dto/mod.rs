// Request and response models exposed through the OpenAPI surface
pub mod auth;
pub mod common;
pub mod trail;
pub mod user;

/// Render a unix timestamp as RFC 3339, falling back to the epoch for out-of-range values
pub(crate) fn format_timestamp(seconds: i64) -> String {
    chrono::DateTime::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .to_rfc3339()
}
