pub mod config;
pub mod post;

pub use config::{ApiConfig, CacheConfig, Config, LoggingConfig};
pub use post::Post;
