pub mod app;
pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod ui;

pub use app::{Dashboard, PipelineSettings};
pub use config::Config;
