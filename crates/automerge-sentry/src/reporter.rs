use std::sync::Arc;

use automerge_core::{services::ErrorReporter, CoreError};
use automerge_models::PullRequestHandle;
use sentry::{protocol::Value, Hub};
use tracing::error;

/// Reports worker errors to Sentry, tagged with the pull request repository.
#[derive(Clone)]
pub struct SentryErrorReporter {
    hub: Arc<Hub>,
}

impl SentryErrorReporter {
    /// Build a reporter bound to the current hub.
    ///
    /// Returns `None` when no enabled client is bound, which happens outside
    /// of [`crate::with_sentry_configuration`].
    pub fn from_current_hub() -> Option<Self> {
        let hub = Hub::current();
        let enabled = hub.client().map_or(false, |client| client.is_enabled());

        enabled.then_some(Self { hub })
    }
}

impl ErrorReporter for SentryErrorReporter {
    fn report(&self, pr_handle: &PullRequestHandle, error: &CoreError) {
        error!(
            owner = %pr_handle.owner(),
            name = %pr_handle.name(),
            pr_number = pr_handle.number(),
            error = %error,
            message = "Error while processing pull request"
        );

        let mut event = sentry::event_from_error(error);
        event
            .tags
            .insert("owner".into(), pr_handle.owner().to_string());
        event.tags.insert(
            "repository".into(),
            pr_handle.repository_path().full_name(),
        );
        event
            .extra
            .insert("pull_request".into(), Value::from(pr_handle.to_string()));

        self.hub.capture_event(event);
    }
}

#[cfg(test)]
mod tests {
    use automerge_ghapi_interface::ApiError;
    use pretty_assertions::assert_eq;
    use sentry::Scope;

    use super::*;

    #[test]
    fn report_with_tags() {
        let events = sentry::test::with_captured_events(|| {
            let reporter = SentryErrorReporter::from_current_hub();
            assert!(reporter.is_some());

            reporter.unwrap().report(
                &("me", "test", 4).into(),
                &CoreError::SnapshotFetchError {
                    source: ApiError::ImplementationError {
                        source: "timeout".into(),
                    },
                },
            );
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.tags.get("owner").map(String::as_str), Some("me"));
        assert_eq!(
            event.tags.get("repository").map(String::as_str),
            Some("me/test")
        );
        assert_eq!(
            event.extra.get("pull_request"),
            Some(&Value::from("me/test#4"))
        );
    }

    #[test]
    fn no_reporter_without_client() {
        let hub = Arc::new(Hub::new(None, Arc::new(Scope::default())));

        Hub::run(hub, || {
            assert!(SentryErrorReporter::from_current_hub().is_none());
        });
    }
}
