pub mod app;
pub mod config;
pub mod favorites;
pub mod schedule;
pub mod tracing;
