pub mod ids;
pub mod iso8601;
