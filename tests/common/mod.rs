//! Shared utilities for integration testing.

use std::fs;
use std::net::SocketAddr;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tokio::net::TcpListener;

use texpress::config::ServiceConfig;
use texpress::http::HttpServer;
use texpress::lifecycle::Shutdown;

/// How the fake compiler behaves on a compile run.
#[allow(dead_code)]
pub enum FakeCompiler {
    /// Writes a small PDF artifact and exits zero.
    Success,
    /// Prints a diagnostic line and exits non-zero.
    Fail { message: &'static str },
    /// Exits zero without producing any artifact.
    SuccessWithoutArtifact,
}

/// Write an executable fake `latexmk` script into `dir`.
///
/// Cleanup invocations (`-c`) exit zero immediately. Compile runs copy the
/// generated LaTeX source and append their working directory to files under
/// `capture_dir` so tests can inspect what the service produced, then
/// behave per `behavior`.
pub fn write_fake_compiler(dir: &Path, capture_dir: &Path, behavior: FakeCompiler) -> PathBuf {
    fs::create_dir_all(capture_dir).expect("create capture dir");

    let behavior_sh = match behavior {
        FakeCompiler::Success => {
            "printf '%%PDF-1.5 fake artifact\\n' > document.pdf\n".to_string()
        }
        FakeCompiler::Fail { message } => format!("echo \"{message}\"\nexit 1\n"),
        FakeCompiler::SuccessWithoutArtifact => "exit 0\n".to_string(),
    };

    let script = format!(
        r#"#!/bin/sh
for arg in "$@"; do
  [ "$arg" = "-c" ] && exit 0
done
cp document.tex "{capture}/captured.tex" 2>/dev/null || true
pwd >> "{capture}/workdirs.log"
{behavior_sh}"#,
        capture = capture_dir.display(),
    );

    let path = dir.join("latexmk");
    fs::write(&path, script).expect("write fake compiler");
    let mut perms = fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("set perms");
    path
}

/// Start the service on an ephemeral port; returns the bound address and
/// the shutdown handle for teardown.
pub async fn spawn_server(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Config pointing at a fake compiler binary.
pub fn config_with_compiler(program: &Path) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.compiler.program = program.to_string_lossy().into_owned();
    config
}
