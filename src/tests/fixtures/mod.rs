//! Library fixtures

/// GraphQL schema from Star Wars.
pub mod starwars;
