pub mod config;
pub mod directive;
pub mod meta;
pub mod model;
pub mod snapshot;
