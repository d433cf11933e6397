pub mod app;
pub mod command;
pub mod config;
pub mod logging;
pub mod render;
pub mod sinks;

pub use app::{App, AppError, Outcome};
pub use config::WizardConfig;
