pub mod statistics;
pub mod store;
