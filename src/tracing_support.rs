//! Tracing support for query diagnostics.
//!
//! Every traversal query opens an `info_span!` named after the query.  With
//! the `tracing` feature enabled the spans go to whatever subscriber is
//! installed; [`init_tracing`] installs a formatting subscriber on stderr
//! that logs each span as it opens and closes, at the level named by the
//! `GRAPHWALK_LOG` environment variable.  Without the feature the span macro
//! expands to a no-op guard.

/// Environment variable holding the maximum level logged by [`init_tracing`].
pub const LOG_LEVEL_VAR: &str = "GRAPHWALK_LOG";

#[cfg(feature = "tracing")]
mod enabled {
    use std::{str::FromStr, sync::Once};

    use tracing::{Level, Subscriber};
    use tracing_subscriber::fmt::{MakeWriter, format::FmtSpan};

    use super::LOG_LEVEL_VAR;

    /// Parses a level name such as `debug` or `TRACE`, falling back to
    /// `WARN` for anything unrecognized.
    pub fn parse_level(value: Option<&str>) -> Level {
        value
            .and_then(|value| Level::from_str(value.trim()).ok())
            .unwrap_or(Level::WARN)
    }

    /// Builds a formatting subscriber that records span opens and closes
    /// at or above `level`.
    pub fn span_subscriber<W>(level: Level, writer: W) -> impl Subscriber + Send + Sync + 'static
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(writer)
            .with_ansi(false)
            .finish()
    }

    /// Installs the global formatting subscriber, writing to stderr.  Later
    /// calls, and calls made after another subscriber was installed, do
    /// nothing.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = parse_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
            let _ = tracing::subscriber::set_global_default(span_subscriber(
                level,
                std::io::stderr,
            ));
        });
    }

    pub(crate) use tracing::info_span;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
