//! External compiler subsystem.
//!
//! Wraps the pre-installed LaTeX compiler binary behind a small async
//! interface: one scoped working directory and one subprocess per call,
//! no shared compiler state, no pooling.

pub mod invoker;

pub use invoker::{LatexCompiler, ARTIFACT_FILENAME, SOURCE_FILENAME};
