//! LaTeX Equations to PDF Rendering Service

pub mod compiler;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
