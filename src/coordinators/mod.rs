// Coordinators layer - Workflow orchestration
//
// Coordinators compose store and provider operations for specific API
// endpoints. They decide the order of checks and own no persistent state.

pub mod credential_coordinator;
pub mod profile_coordinator;
pub mod trail_coordinator;

pub use credential_coordinator::CredentialCoordinator;
pub use profile_coordinator::ProfileCoordinator;
pub use trail_coordinator::TrailCoordinator;

#[cfg(test)]
mod credential_coordinator_tests;
