pub mod entities;
pub mod estimator;
pub mod table;

pub use entities::*;
pub use estimator::*;
pub use table::*;
