use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::{DecisionEngine, RewriteDecision};
use crate::bridge::{Task, TaskBridge};
use crate::error::{SinkError, SourceError};

/// What happened when a rewrite was handed to the sink.
#[derive(Debug)]
pub enum ApplyOutcome {
    Applied,
    /// Dry run: the rename was logged but not sent.
    Skipped,
    Failed(SinkError),
}

/// Per-run counters, logged when the run ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub duplicates: usize,
    pub unchanged: usize,
    pub rewritten: usize,
    pub failed_decisions: usize,
    pub applied: usize,
    pub failed_applies: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineConfig {
    /// Decide and log, but never rename.
    pub dry_run: bool,
}

/// Fetch → decide → apply, once, sequentially.
pub struct Pipeline {
    bridge: Arc<dyn TaskBridge>,
    engine: DecisionEngine,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(bridge: Arc<dyn TaskBridge>, engine: DecisionEngine, config: PipelineConfig) -> Self {
        Self {
            bridge,
            engine,
            config,
        }
    }

    /// Run once over the current task list.
    ///
    /// Only a failed fetch is returned as an error, after it has been logged;
    /// everything after that is isolated per task and reflected in the
    /// summary.
    pub async fn run(&self) -> Result<RunSummary, SourceError> {
        let tasks = match self.bridge.list_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!(error = %e, "failed to fetch tasks, nothing was changed");
                return Err(e);
            }
        };
        info!(count = tasks.len(), "fetched tasks");

        let mut summary = RunSummary {
            fetched: tasks.len(),
            ..RunSummary::default()
        };
        let mut seen: HashSet<String> = HashSet::new();

        for task in &tasks {
            if !seen.insert(task.id.clone()) {
                debug!(id = %task.id, "duplicate task id, skipping");
                summary.duplicates += 1;
                continue;
            }
            self.process(task, &mut summary).await;
        }

        info!(
            fetched = summary.fetched,
            duplicates = summary.duplicates,
            unchanged = summary.unchanged,
            rewritten = summary.rewritten,
            failed_decisions = summary.failed_decisions,
            applied = summary.applied,
            failed_applies = summary.failed_applies,
            "run complete"
        );
        Ok(summary)
    }

    async fn process(&self, task: &Task, summary: &mut RunSummary) {
        let new_title = match self.engine.decide(&task.title).await {
            RewriteDecision::Unchanged => {
                summary.unchanged += 1;
                return;
            }
            RewriteDecision::Failed(_) => {
                summary.failed_decisions += 1;
                return;
            }
            RewriteDecision::Rewritten(new_title) => new_title,
        };
        summary.rewritten += 1;

        match self.apply(&task.id, &new_title).await {
            ApplyOutcome::Applied => summary.applied += 1,
            ApplyOutcome::Skipped => {}
            ApplyOutcome::Failed(_) => summary.failed_applies += 1,
        }
    }

    async fn apply(&self, id: &str, new_title: &str) -> ApplyOutcome {
        if self.config.dry_run {
            info!(id, new_title, "dry run: would update task");
            return ApplyOutcome::Skipped;
        }

        match self.bridge.rename_task(id, new_title).await {
            Ok(()) => {
                info!(id, new_title, "updated task");
                ApplyOutcome::Applied
            }
            Err(e) => {
                error!(id, error = %e, "failed to update task");
                ApplyOutcome::Failed(e)
            }
        }
    }
}
