use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Task, TaskBridge};
use crate::error::{SinkError, SourceError};

/// An in-memory task manager for tests. Records every rename attempt.
pub struct MockBridge {
    tasks: Result<Vec<Task>, String>,
    failing_ids: HashSet<String>,
    renames: Mutex<Vec<(String, String)>>,
    list_calls: AtomicUsize,
}

impl MockBridge {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Ok(tasks),
            failing_ids: HashSet::new(),
            renames: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// A bridge whose listing always fails with the given message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            tasks: Err(message.into()),
            ..Self::new(Vec::new())
        }
    }

    /// Make `rename_task` fail for this id.
    pub fn fail_rename(mut self, id: impl Into<String>) -> Self {
        self.failing_ids.insert(id.into());
        self
    }

    /// Every rename attempted, including ones that failed.
    pub fn renames(&self) -> Vec<(String, String)> {
        self.renames.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskBridge for MockBridge {
    async fn list_tasks(&self) -> Result<Vec<Task>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.tasks.clone().map_err(SourceError::Bridge)
    }

    async fn rename_task(&self, id: &str, new_title: &str) -> Result<(), SinkError> {
        self.renames
            .lock()
            .unwrap()
            .push((id.to_string(), new_title.to_string()));

        if self.failing_ids.contains(id) {
            return Err(SinkError::Bridge(format!("MockBridge: rename of {} rejected", id)));
        }
        Ok(())
    }
}
