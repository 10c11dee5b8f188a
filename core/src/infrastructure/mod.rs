pub mod catalog;
pub mod latency;
