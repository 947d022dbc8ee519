// Crate root library declaration and module exports.
pub mod classify;
pub mod config;
pub mod error;
pub mod model;

pub use classify::Classifier;
pub use config::Config;
pub use error::{ClassifyError, ConfigError};
