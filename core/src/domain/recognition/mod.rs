pub mod confidence;
pub mod entities;
pub mod patterns;
pub mod ports;
pub mod selector;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
