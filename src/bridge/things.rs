use async_trait::async_trait;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

use super::{Task, TaskBridge, parse_task_list};
use crate::consts::DEFAULT_APP;
use crate::error::{SinkError, SourceError};

/// Lists every to-do as `[{id, name}]` JSON. argv: `[app]`.
const LIST_SCRIPT: &str = r#"function run(argv) {
  const app = Application(argv[0]);
  const todos = app.toDos().map((todo) => ({ id: todo.id(), name: todo.name() }));
  return JSON.stringify(todos);
}"#;

/// Renames one to-do. argv: `[app, id, title]`. Values are never spliced
/// into the script source.
const RENAME_SCRIPT: &str = r#"function run(argv) {
  const [appName, id, title] = argv;
  const app = Application(appName);
  const todo = app.toDos().find((t) => t.id() === id);
  if (!todo) {
    throw new Error("task not found: " + id);
  }
  todo.name = title;
  return "";
}"#;

const NOT_FOUND_MARKER: &str = "task not found";

/// Talks to Things 3 through `osascript -l JavaScript` (JXA).
pub struct ThingsBridge {
    program: String,
    app: String,
}

impl Default for ThingsBridge {
    fn default() -> Self {
        Self::new(DEFAULT_APP)
    }
}

impl ThingsBridge {
    pub fn new(app: impl Into<String>) -> Self {
        Self::with_program("osascript", app)
    }

    /// Use a different interpreter binary. Anything that accepts
    /// `-l JavaScript -e <script> <args…>` works.
    pub fn with_program(program: impl Into<String>, app: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            app: app.into(),
        }
    }

    async fn run_script(&self, script: &str, args: &[&str]) -> std::io::Result<Output> {
        debug!(program = %self.program, app = %self.app, "running bridge script");
        Command::new(&self.program)
            .arg("-l")
            .arg("JavaScript")
            .arg("-e")
            .arg(script)
            .args(args)
            .output()
            .await
    }
}

fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!(
        "exit code {}: {}",
        output.status.code().unwrap_or(-1),
        stderr.trim()
    )
}

#[async_trait]
impl TaskBridge for ThingsBridge {
    async fn list_tasks(&self) -> Result<Vec<Task>, SourceError> {
        let output = self
            .run_script(LIST_SCRIPT, &[self.app.as_str()])
            .await
            .map_err(|e| SourceError::Bridge(format!("failed to spawn {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(SourceError::Bridge(failure_text(&output)));
        }

        parse_task_list(&String::from_utf8_lossy(&output.stdout))
    }

    async fn rename_task(&self, id: &str, new_title: &str) -> Result<(), SinkError> {
        let output = self
            .run_script(RENAME_SCRIPT, &[self.app.as_str(), id, new_title])
            .await
            .map_err(|e| SinkError::Bridge(format!("failed to spawn {}: {}", self.program, e)))?;

        if output.status.success() {
            return Ok(());
        }

        if String::from_utf8_lossy(&output.stderr).contains(NOT_FOUND_MARKER) {
            return Err(SinkError::NotFound(id.to_string()));
        }
        Err(SinkError::Bridge(failure_text(&output)))
    }
}
