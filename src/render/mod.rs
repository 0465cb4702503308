//! Render pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! Raw delimited string
//!     → decoder.rs (split, trim, validate)
//!     → document.rs (fragments → LaTeX source)
//!     → compiler subsystem (LaTeX source → PDF bytes)
//! ```
//!
//! Every stage is a pure function over request-scoped data; nothing here
//! is shared between requests.

pub mod decoder;
pub mod document;
pub mod error;

pub use decoder::{split_fragments, FRAGMENT_DELIMITER};
pub use document::build_document;
pub use error::{RenderError, RenderResult};
