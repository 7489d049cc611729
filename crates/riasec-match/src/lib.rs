pub mod career;
pub mod config;
pub mod error;
pub mod telemetry;
