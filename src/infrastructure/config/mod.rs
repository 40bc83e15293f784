//! Configuration management module

mod loader;

pub use loader::{ConfigError, ConfigLoader};
