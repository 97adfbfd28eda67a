//! Centralized mocks and fixtures for testing
//!
//! Reusable fixture vehicles and test servers to reduce duplication
//! across test files.

pub mod entities;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use entities::Fixtures;
#[allow(unused_imports)]
pub use test_server::TestServer;
