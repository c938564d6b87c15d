//! Command implementations

mod check;
mod config;
mod models;

pub use check::check;
pub use config::config;
pub use models::models;
