// Test utilities - only compiled for unit tests
pub mod utils;
