use std::sync::Arc;

use automerge_models::{PullRequestHandle, RepositoryPath};
use serde::Serialize;
use shaku::HasComponent;
use tokio::sync::{Mutex, Notify};
use tracing::{debug, info};

use super::{EnqueueOutcome, WorkerState};
use crate::{
    use_cases::pulls::{MergeOutcome, ProcessPullRequestInterface},
    CoreContext, CoreError, Result,
};

/// Introspection view of a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerStatus {
    pub current: Option<PullRequestHandle>,
    pub queue: Vec<PullRequestHandle>,
}

/// Serial task executor of one repository.
pub struct RepositoryWorker {
    repository: RepositoryPath,
    ctx: CoreContext,
    state: Mutex<WorkerState>,
    idle: Notify,
}

impl RepositoryWorker {
    pub fn new(repository: RepositoryPath, ctx: CoreContext) -> Self {
        Self {
            repository,
            ctx,
            state: Mutex::new(WorkerState::Idle),
            idle: Notify::new(),
        }
    }

    pub fn repository(&self) -> &RepositoryPath {
        &self.repository
    }

    /// Queue a task, starting it right away when the worker is idle.
    pub async fn enqueue(self: &Arc<Self>, task: PullRequestHandle) -> EnqueueOutcome {
        let outcome = self.state.lock().await.enqueue(task.clone());

        match outcome {
            EnqueueOutcome::Started => {
                debug!(pr_handle = %task, message = "Starting task");
                tokio::spawn(self.clone().drain(task));
            }
            EnqueueOutcome::Queued { position } => {
                debug!(pr_handle = %task, position = position, message = "Task queued");
            }
            EnqueueOutcome::AlreadyRunning => {
                debug!(pr_handle = %task, message = "Task already running, skipping");
            }
        }

        outcome
    }

    pub async fn current_task(&self) -> Option<PullRequestHandle> {
        self.state.lock().await.current().cloned()
    }

    pub async fn queued_tasks(&self) -> Vec<PullRequestHandle> {
        self.state.lock().await.backlog()
    }

    pub async fn status(&self) -> WorkerStatus {
        let state = self.state.lock().await;

        WorkerStatus {
            current: state.current().cloned(),
            queue: state.backlog(),
        }
    }

    /// Wait until the current task and the whole backlog are processed.
    pub async fn wait_until_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.state.lock().await.is_idle() {
                return;
            }

            notified.await;
        }
    }

    async fn drain(self: Arc<Self>, mut task: PullRequestHandle) {
        loop {
            self.run_task(&task).await;

            let next = self.state.lock().await.complete();
            match next {
                Some(next) => task = next,
                None => {
                    debug!(repository = %self.repository, message = "Worker is idle");
                    self.idle.notify_waiters();
                    return;
                }
            }
        }
    }

    #[tracing::instrument(skip_all, fields(pr_handle = %task))]
    async fn run_task(&self, task: &PullRequestHandle) {
        match self.process(task).await {
            Ok(outcome) => {
                info!(
                    owner = %task.owner(),
                    name = %task.name(),
                    pr_number = task.number(),
                    outcome = ?outcome,
                    message = "Pull request processed"
                );
            }
            Err(e) => self.ctx.error_reporter.report(task, &e),
        }
    }

    /// Process on a separate task so a panic only fails this task.
    async fn process(&self, task: &PullRequestHandle) -> Result<MergeOutcome> {
        let ctx = self.ctx.clone();
        let pr_handle = task.clone();

        tokio::spawn(async move {
            let process_uc: &dyn ProcessPullRequestInterface = ctx.core_module.resolve_ref();
            process_uc.run(&ctx, &pr_handle).await
        })
        .await
        .unwrap_or_else(|e| {
            let message = if e.is_panic() {
                let payload = e.into_panic();
                payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".into())
            } else {
                e.to_string()
            };

            Err(CoreError::TaskPanicked { message })
        })
    }
}
