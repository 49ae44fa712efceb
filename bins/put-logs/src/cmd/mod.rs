pub mod cloudwatch;
pub mod config;
pub mod error;
pub mod upload;
