//! Tracing and environment bootstrap.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes structured logging for a Cuadra process.
///
/// Loads `.env` if present, then installs a `fmt` subscriber filtered by
/// `RUST_LOG` (defaulting to `cuadra=debug`). Call once at startup; a
/// second call panics because a global subscriber is already set.
pub fn init_tracing() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cuadra=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
