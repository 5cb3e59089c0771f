use std::{future::Future, str::FromStr};

use automerge_config::Config;
use sentry::{
    integrations::debug_images::DebugImagesIntegration,
    types::{Dsn, ParseDsnError},
    ClientOptions,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SentryError {
    #[error("Invalid Sentry URL: {}", source)]
    InvalidUrl { source: ParseDsnError },
}

/// Configure Sentry integration by wrapping a function.
///
/// Sentry stays disabled when no URL is configured.
pub async fn with_sentry_configuration<T, Fut, E>(config: &Config, func: T) -> Result<(), E>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: From<SentryError>,
{
    let _guard = {
        if config.sentry.url.is_empty() {
            None
        } else {
            info!("Sentry integration enabled.");

            // Enable backtraces
            std::env::set_var("RUST_BACKTRACE", "1");

            let mut options =
                ClientOptions::new().add_integration(DebugImagesIntegration::default());

            options.dsn = Some(
                Dsn::from_str(&config.sentry.url)
                    .map_err(|e| SentryError::InvalidUrl { source: e })?,
            );
            options.default_integrations = true;
            options.in_app_exclude.push("sentry");
            options.in_app_exclude.push("tokio");
            options.release = Some(config.version.clone().into());
            options.attach_stacktrace = true;
            options.traces_sample_rate = config.sentry.traces_sample_rate;
            options.debug = false;

            Some(sentry::init(options))
        }
    };

    func().await
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use super::*;

    #[tokio::test]
    async fn invalid_url() {
        let mut config = Config::from_env_no_version();
        config.sentry.url = "not a dsn".into();

        let result: Result<(), SentryError> =
            with_sentry_configuration(&config, || async { Ok(()) }).await;

        assert!(matches!(result, Err(SentryError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn disabled_without_url() {
        let mut config = Config::from_env_no_version();
        config.sentry.url = String::new();

        let called = Arc::new(AtomicBool::new(false));
        let result: Result<(), SentryError> = with_sentry_configuration(&config, {
            let called = called.clone();
            move || async move {
                called.store(true, Ordering::SeqCst);
                Ok(())
            }
        })
        .await;

        assert!(result.is_ok());
        assert!(called.load(Ordering::SeqCst));
    }
}
