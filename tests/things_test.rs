//! Drives `ThingsBridge` against a stand-in interpreter script.
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::OnceLock;

use emojify::bridge::things::ThingsBridge;
use emojify::bridge::{Task, TaskBridge};
use emojify::error::{SinkError, SourceError};

/// Behaves like `osascript` for the app names and ids used below.
const FAKE_OSASCRIPT: &str = r#"#!/bin/sh
[ "$1" = "-l" ] && [ "$2" = "JavaScript" ] && [ "$3" = "-e" ] || { echo "bad flags" >&2; exit 2; }
if [ "$#" -eq 5 ]; then
  case "$5" in
    Broken) echo "not json" ;;
    Closed) echo "execution error: Application isn't running. (-600)" >&2; exit 1 ;;
    *) echo '[{"id":"1","name":"Buy milk"},{"id":"2","name":"Call mom 📞"}]' ;;
  esac
  exit 0
fi
case "$6" in
  missing) echo "execution error: Error: task not found: missing (-2700)" >&2; exit 1 ;;
  reject) echo "args: $5|$6|$7" >&2; exit 1 ;;
  *) exit 0 ;;
esac
"#;

/// Written once per test binary so no test forks while the file is open.
fn fake_osascript() -> String {
    static PATH: OnceLock<(tempfile::TempDir, PathBuf)> = OnceLock::new();
    let (_, path) = PATH.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("osascript");
        std::fs::write(&path, FAKE_OSASCRIPT).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn lists_tasks_from_script_output() {
    let bridge = ThingsBridge::with_program(fake_osascript(), "Things3");

    let tasks = bridge.list_tasks().await.unwrap();

    assert_eq!(
        tasks,
        vec![Task::new("1", "Buy milk"), Task::new("2", "Call mom 📞")]
    );
}

#[tokio::test]
async fn unparseable_output_is_malformed() {
    let bridge = ThingsBridge::with_program(fake_osascript(), "Broken");

    let result = bridge.list_tasks().await;

    assert!(matches!(result, Err(SourceError::Malformed(_))));
}

#[tokio::test]
async fn script_failure_is_bridge_error_with_stderr() {
    let bridge = ThingsBridge::with_program(fake_osascript(), "Closed");

    let result = bridge.list_tasks().await;

    assert!(matches!(result, Err(SourceError::Bridge(ref m)) if m.contains("isn't running")));
}

#[tokio::test]
async fn rename_succeeds() {
    let bridge = ThingsBridge::with_program(fake_osascript(), "Things3");
    bridge.rename_task("1", "Buy milk 🥛").await.unwrap();
}

#[tokio::test]
async fn rename_of_missing_task_is_not_found() {
    let bridge = ThingsBridge::with_program(fake_osascript(), "Things3");

    let result = bridge.rename_task("missing", "x").await;

    assert!(matches!(result, Err(SinkError::NotFound(ref id)) if id == "missing"));
}

#[tokio::test]
async fn rename_passes_values_as_separate_arguments() {
    let bridge = ThingsBridge::with_program(fake_osascript(), "Things3");

    let result = bridge.rename_task("reject", "Call \"mom\"; 📞").await;

    match result {
        Err(SinkError::Bridge(message)) => {
            assert!(message.contains("args: Things3|reject|Call \"mom\"; 📞"));
        }
        other => panic!("expected Bridge error, got {:?}", other),
    }
}
