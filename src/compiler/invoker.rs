//! External LaTeX compiler invocation.
//!
//! Each call gets its own scoped temporary directory; the directory is
//! removed on every exit path when the guard drops. The subprocess runs
//! with no timeout, so a hung compiler blocks its request.

use std::path::Path;
use std::process::Stdio;

use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::CompilerConfig;
use crate::render::error::{RenderError, RenderResult};

/// Fixed name of the LaTeX source file written into the working directory.
pub const SOURCE_FILENAME: &str = "document.tex";

/// Name of the artifact the compiler is expected to produce, derived from
/// the source file name by the compiler's own convention.
pub const ARTIFACT_FILENAME: &str = "document.pdf";

/// Invokes the external LaTeX compiler for one document at a time.
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    program: String,
}

impl LatexCompiler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &CompilerConfig) -> Self {
        Self::new(config.program.clone())
    }

    /// Compile LaTeX source to PDF bytes.
    ///
    /// Writes the source into a fresh temporary directory, runs the
    /// compiler with `-pdf -interaction=nonstopmode -halt-on-error`, and
    /// reads the artifact back. Non-zero exit or a missing artifact is a
    /// [`RenderError::CompilationFailed`] carrying the compiler's combined
    /// stdout/stderr.
    pub async fn compile(&self, source: &str) -> RenderResult<Vec<u8>> {
        let workdir = TempDir::new()?;
        let source_path = workdir.path().join(SOURCE_FILENAME);
        tokio::fs::write(&source_path, source).await?;

        debug!(
            program = %self.program,
            workdir = %workdir.path().display(),
            source_bytes = source.len(),
            "Invoking LaTeX compiler"
        );

        let output = Command::new(&self.program)
            .args(["-pdf", "-interaction=nonstopmode", "-halt-on-error"])
            .arg(SOURCE_FILENAME)
            .current_dir(workdir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let diagnostics = combined_output(&output.stdout, &output.stderr);

        if !output.status.success() {
            warn!(
                program = %self.program,
                exit_code = output.status.code().map(i64::from).unwrap_or(-1),
                "LaTeX compiler exited with failure"
            );
            return Err(RenderError::compilation_failed(diagnostics));
        }

        let artifact_path = workdir.path().join(ARTIFACT_FILENAME);
        if tokio::fs::metadata(&artifact_path).await.is_err() {
            return Err(RenderError::compilation_failed(
                "compiler reported success but no PDF artifact was produced",
            ));
        }

        self.cleanup_aux_files(workdir.path()).await;

        let bytes = tokio::fs::read(&artifact_path).await?;
        Ok(bytes)
    }

    /// Best-effort removal of the compiler's auxiliary files. Failures are
    /// ignored; the whole directory is removed when the guard drops anyway.
    async fn cleanup_aux_files(&self, workdir: &Path) {
        let _ = Command::new(&self.program)
            .arg("-c")
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
    }
}

/// Merge captured stdout and stderr into one diagnostic text stream.
fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    let err = String::from_utf8_lossy(stderr);
    if !err.trim().is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&err);
    }
    text
}
