pub mod cities;
pub mod enrichment;
