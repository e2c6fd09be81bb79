//! Library tests and fixtures

pub mod fixtures;
mod starwars_tests;
mod thread_tests;
