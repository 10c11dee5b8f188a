pub mod food;
pub mod health;
pub mod recognition;
pub mod server;
