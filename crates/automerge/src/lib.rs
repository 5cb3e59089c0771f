//! Process wiring of the auto-merge bot.

use std::future::Future;

use anyhow::Result;
use automerge_config::Config;
use automerge_logging::configure_logging;
use automerge_sentry::with_sentry_configuration;
use tracing::info;

mod context;

pub use context::AppContext;

/// Load the environment, build the configuration and set up logging.
pub fn initialize(version: &str) -> Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env(version.to_string());
    configure_logging(&config)?;

    info!(
        name = %config.name,
        version = %config.version,
        message = "Configuration loaded"
    );

    Ok(config)
}

/// Run the bot body with Sentry configured for its whole lifetime.
///
/// [`AppContext::new`] must be called inside `func` to report errors to Sentry.
pub async fn run<T, Fut>(config: &Config, func: T) -> Result<()>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    with_sentry_configuration(config, func).await
}

#[cfg(test)]
mod tests {
    use automerge_sentry::SentryErrorReporter;

    use super::*;

    #[tokio::test]
    async fn run_binds_sentry_client() {
        let mut config = Config::from_env_no_version();
        config.sentry.url = "https://public@sentry.invalid/1".into();

        run(&config, || async {
            assert!(SentryErrorReporter::from_current_hub().is_some());
            Ok(())
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn run_without_sentry_url() {
        let mut config = Config::from_env_no_version();
        config.sentry.url = String::new();

        run(&config, || async { Ok(()) }).await.unwrap();
    }
}
