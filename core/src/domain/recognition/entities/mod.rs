pub mod feature_vector;
pub mod recognition_result;

pub use feature_vector::*;
pub use recognition_result::*;
