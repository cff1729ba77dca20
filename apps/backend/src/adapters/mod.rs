//! Adapters for external dependencies.

pub mod cities_sea;
