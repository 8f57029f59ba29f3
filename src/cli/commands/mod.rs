//! CLI command implementations.

mod config;
mod doctor;
mod improve;
mod serve;

pub use config::run_config;
pub use doctor::run_doctor;
pub use improve::run_improve;
pub use serve::run_serve;
