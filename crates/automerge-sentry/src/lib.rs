//! Sentry integration.

mod client;
mod reporter;

pub use client::{with_sentry_configuration, SentryError};
pub use reporter::SentryErrorReporter;
