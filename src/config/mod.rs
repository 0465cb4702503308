//! Configuration subsystem.
//!
//! Loaded once at startup from a TOML file (or defaults), validated, and
//! handed to the server by value. There is no hot reload; a config change
//! means a restart.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CompilerConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ServiceConfig,
};
pub use validation::{validate_config, ValidationError};
