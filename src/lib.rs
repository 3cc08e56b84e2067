pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod sources;
pub mod ui;

pub use config::AppConfig;
pub use error::HospitalError;
