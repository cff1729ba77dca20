//! Environment-driven configuration.

pub mod db;
pub mod enrichment;
pub mod env;
pub mod server;

pub use db::{DbProfile, DbSettings};
pub use enrichment::EnrichmentConfig;
pub use server::ServerConfig;
