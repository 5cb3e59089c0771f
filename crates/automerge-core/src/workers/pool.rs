use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use automerge_models::{PullRequestHandle, RepositoryPath};
use futures::future::join_all;
use tokio::sync::Mutex;
use tracing::debug;

use super::{EnqueueOutcome, RepositoryWorker, WorkerStatus};
use crate::CoreContext;

/// Process-wide registry of repository workers.
///
/// Workers are created on the first task of a repository and never removed.
pub struct RepositoryWorkerPool {
    ctx: CoreContext,
    workers: Mutex<HashMap<RepositoryPath, Arc<RepositoryWorker>>>,
}

impl RepositoryWorkerPool {
    pub fn new(ctx: CoreContext) -> Self {
        Self {
            ctx,
            workers: Mutex::new(HashMap::new()),
        }
    }

    /// Hand a task to the worker of its repository.
    pub async fn route(&self, task: PullRequestHandle) -> EnqueueOutcome {
        let worker = self.get_or_create_worker(task.repository_path()).await;
        worker.enqueue(task).await
    }

    async fn get_or_create_worker(&self, repository: &RepositoryPath) -> Arc<RepositoryWorker> {
        let mut workers = self.workers.lock().await;
        workers
            .entry(repository.clone())
            .or_insert_with(|| {
                debug!(repository = %repository, message = "Creating repository worker");
                Arc::new(RepositoryWorker::new(repository.clone(), self.ctx.clone()))
            })
            .clone()
    }

    pub async fn worker(&self, repository: &RepositoryPath) -> Option<Arc<RepositoryWorker>> {
        self.workers.lock().await.get(repository).cloned()
    }

    pub async fn current_task(&self, repository: &RepositoryPath) -> Option<PullRequestHandle> {
        match self.worker(repository).await {
            Some(worker) => worker.current_task().await,
            None => None,
        }
    }

    pub async fn queued_tasks(&self, repository: &RepositoryPath) -> Vec<PullRequestHandle> {
        match self.worker(repository).await {
            Some(worker) => worker.queued_tasks().await,
            None => vec![],
        }
    }

    pub async fn repository_workers(&self) -> BTreeMap<RepositoryPath, WorkerStatus> {
        let workers = self.all_workers().await;
        let statuses = join_all(workers.iter().map(|w| w.status())).await;

        workers
            .iter()
            .map(|w| w.repository().clone())
            .zip(statuses)
            .collect()
    }

    pub async fn workers_count(&self) -> usize {
        self.workers.lock().await.len()
    }

    /// Wait until every known worker is idle.
    pub async fn wait_until_idle(&self) {
        let workers = self.all_workers().await;
        join_all(workers.iter().map(|w| w.wait_until_idle())).await;
    }

    async fn all_workers(&self) -> Vec<Arc<RepositoryWorker>> {
        self.workers.lock().await.values().cloned().collect()
    }
}
