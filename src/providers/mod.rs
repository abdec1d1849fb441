// Providers layer - Work performers
//
// Providers hold no per-request state. Coordinators compose them with stores
// to carry out an operation.

pub mod crypto_provider;
pub mod field_validator;
pub mod token_provider;

// Re-export providers for clean imports
pub use crypto_provider::CryptoProvider;
pub use field_validator::FieldValidator;
pub use token_provider::TokenProvider;
