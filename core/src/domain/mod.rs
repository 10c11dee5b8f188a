pub mod catalog;
pub mod common;
pub mod nutrition;
pub mod recognition;
pub mod taxonomy;
