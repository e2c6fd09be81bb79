pub mod base;
pub mod containers;
pub mod name;
pub mod scalars;
