// Library interface for testing
pub mod allocation;
pub mod availability;
pub mod config;
pub mod constants;
pub mod error;
pub mod fleet;
pub mod models;
pub mod notifications;
pub mod requests;
pub mod session;
pub mod status_filter;
pub mod time;
pub mod traits;

pub use error::{FleetError, Result};
