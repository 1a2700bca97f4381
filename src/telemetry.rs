// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the demo binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application.

use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Filter used when neither an explicit filter nor `RUST_LOG` is usable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// The first valid candidate wins: `explicit_filter`, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns [`Error::Telemetry`] if no candidate filter parses or if a global
/// subscriber is already installed.
pub fn init_tracing(explicit_filter: Option<&str>) -> Result<()> {
    let filter = resolve_filter(explicit_filter, std::env::var("RUST_LOG").ok())?;

    let subscriber = Registry::default().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true),
    );
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Telemetry(err.to_string()))
}

fn resolve_filter(explicit: Option<&str>, env: Option<String>) -> Result<EnvFilter> {
    let mut candidates = Vec::new();
    if let Some(f) = explicit {
        candidates.push(f.to_string());
    }
    if let Some(env) = env {
        candidates.push(env);
    }
    candidates.push(DEFAULT_FILTER.to_string());

    candidates
        .into_iter()
        .find_map(|candidate| EnvFilter::try_new(candidate).ok())
        .ok_or_else(|| Error::Telemetry("invalid log filter".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_takes_precedence() {
        let filter = resolve_filter(Some("snacknote=trace"), Some("warn".into()))
            .expect("filter should resolve");
        assert_eq!(filter.to_string(), "snacknote=trace");
    }

    #[test]
    fn invalid_explicit_filter_falls_back_to_env() {
        let filter = resolve_filter(Some("snacknote=loud"), Some("warn".into()))
            .expect("filter should resolve");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn falls_back_to_default() {
        let filter = resolve_filter(None, None).expect("filter should resolve");
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }
}
