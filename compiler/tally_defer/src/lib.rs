//! Deferred diagnostic reporting.
//!
//! Classifies every diagnostic an analysis engine produces, decides whether
//! to drop, forward or augment it, and holds the report back until the
//! driver explicitly asks for it.
//!
//! Two pieces:
//! - [`classify`]: pure mapping from a diagnostic to a [`Category`]
//! - [`DeferredErrorManager`]: the stateful filter in front of an
//!   [`Aggregator`](tally_diagnostic::Aggregator), with an explicit
//!   collect-then-[`finalize`](DeferredErrorManager::finalize) lifecycle
//!
//! # Tracing
//!
//! - `RUST_LOG=tally_defer=debug`: suppression decisions, the explanation,
//!   phase ends and finalize.
//! - `RUST_LOG=tally_defer=trace`: every forwarded diagnostic as well.

mod classify;
mod error;
mod explanation;
mod manager;

pub use classify::{classify, Category};
pub use error::FinalizeError;
pub use explanation::MISSING_TYPES_EXPLANATION;
pub use manager::{DeferredErrorManager, Disposition, ManagerConfig, SuppressReason};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(TRACING_INIT.is_completed());
    }
}
