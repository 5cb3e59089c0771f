use std::{collections::BTreeMap, sync::Arc};

use automerge_config::Config;
use automerge_core::{
    services::{ErrorReporter, LoggingErrorReporter, RepositoryConfigService},
    workers::{EnqueueOutcome, RepositoryWorkerPool},
    CoreContext, CoreModule,
};
use automerge_ghapi_interface::ApiService;
use automerge_models::{PullRequestHandle, RepositoryPath};
use automerge_sentry::SentryErrorReporter;
use tracing::{info, warn};

/// Process-wide state, created once at startup.
pub struct AppContext {
    core: CoreContext,
    pool: RepositoryWorkerPool,
}

impl AppContext {
    /// Build the context, reporting errors to Sentry when a client is bound.
    pub fn new(
        config: Config,
        api_service: Arc<dyn ApiService>,
        config_service: Arc<dyn RepositoryConfigService>,
    ) -> Self {
        let error_reporter: Arc<dyn ErrorReporter> = match SentryErrorReporter::from_current_hub()
        {
            Some(reporter) => {
                info!("Reporting errors to Sentry");
                Arc::new(reporter)
            }
            None => {
                if !config.sentry.url.is_empty() {
                    warn!("Sentry URL is set but no Sentry client is bound");
                }

                info!("Reporting errors to logs");
                Arc::new(LoggingErrorReporter::new())
            }
        };

        Self::with_error_reporter(config, api_service, config_service, error_reporter)
    }

    pub fn with_error_reporter(
        config: Config,
        api_service: Arc<dyn ApiService>,
        config_service: Arc<dyn RepositoryConfigService>,
        error_reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        let core = CoreContext {
            config: Arc::new(config),
            core_module: Arc::new(CoreModule::builder().build()),
            api_service,
            config_service,
            error_reporter,
        };
        let pool = RepositoryWorkerPool::new(core.clone());

        Self { core, pool }
    }

    pub fn core(&self) -> &CoreContext {
        &self.core
    }

    pub fn pool(&self) -> &RepositoryWorkerPool {
        &self.pool
    }

    pub async fn handle_task(&self, task: PullRequestHandle) -> EnqueueOutcome {
        self.pool.route(task).await
    }

    /// Queue one task per pull request number of a repository.
    pub async fn handle_pull_requests(
        &self,
        repository: &RepositoryPath,
        numbers: &[u64],
    ) -> Vec<EnqueueOutcome> {
        let mut outcomes = Vec::with_capacity(numbers.len());
        for number in numbers {
            outcomes.push(
                self.handle_task(PullRequestHandle::new(repository.clone(), *number))
                    .await,
            );
        }

        outcomes
    }

    /// Current and queued tasks of every repository, keyed by full name.
    pub async fn queue_status(&self) -> serde_json::Result<serde_json::Value> {
        let workers: BTreeMap<String, _> = self
            .pool
            .repository_workers()
            .await
            .into_iter()
            .map(|(repository, status)| (repository.full_name(), status))
            .collect();

        serde_json::to_value(workers)
    }

    pub async fn wait_until_idle(&self) {
        self.pool.wait_until_idle().await
    }
}
