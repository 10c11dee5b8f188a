pub mod embedded;

pub use embedded::*;
