pub mod answers;
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::BancoApp;
pub use config::AppConfig;
