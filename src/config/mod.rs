//! Configuration for the crawl service
//!
//! TOML-based configuration covering the server bind address, the crawler's
//! identifying user agent, and the domain registry database. Every field has a
//! default, so the service starts without a config file; when one is supplied
//! it is validated and its SHA-256 hash is logged at startup.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, RegistryConfig, ServerConfig, UserAgentConfig};
pub use validation::validate;
