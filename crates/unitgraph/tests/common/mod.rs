//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A small `systemd-analyze dot` dump.
///
/// `init.scope` and `basic.target` both have no incoming edges; the bootstrap
/// unit is skipped, so `basic.target` is the selected root. `lonely.mount`
/// is unreachable from it.
pub const SAMPLE_DUMP: &str = r#"digraph systemd {
	"init.scope"->"lonely.mount" [color="black"];
	"basic.target"->"sockets.target" [color="black"];
	"basic.target"->"sysinit.target" [color="grey66"];
	"sockets.target"->"dbus.socket" [color="grey66"];
	"sysinit.target"->"dbus.socket" [color="green"];
	"dbus.socket"->"dbus.service" [color="black"];
	"basic.target"->"shutdown.target" [color="red"];
}
"#;

/// Path to the compiled unitgraph binary
pub fn unitgraph_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_unitgraph"))
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Temporary directory holding [`SAMPLE_DUMP`] as `deps.dot`
pub fn sample_dir() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = write_file(temp.path(), "deps.dot", SAMPLE_DUMP);
    (temp, path)
}

/// Run the unitgraph binary with colors disabled
pub fn run_unitgraph(args: &[&str]) -> Output {
    Command::new(unitgraph_binary())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("UNITGRAPH_ASCII")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute unitgraph binary")
}

/// Stdout of a successful run, panicking with stderr otherwise
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
