pub mod mock;
pub mod things;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{SinkError, SourceError};

/// A to-do item as the task manager reports it.
///
/// Things calls the title `name`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Read/write access to the task manager. Could be a scripting bridge, a
/// URL scheme, or an in-memory fake.
#[async_trait]
pub trait TaskBridge: Send + Sync {
    /// All tasks, in the order the application returns them.
    async fn list_tasks(&self) -> Result<Vec<Task>, SourceError>;

    /// Overwrite the title of the task with the given id.
    async fn rename_task(&self, id: &str, new_title: &str) -> Result<(), SinkError>;
}

/// Parse the serialized task list printed by a bridge script.
pub fn parse_task_list(raw: &str) -> Result<Vec<Task>, SourceError> {
    Ok(serde_json::from_str(raw.trim())?)
}
