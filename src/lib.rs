//! Camp signups: REST backend for activities, campers, and activity signups.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod repo;
pub mod routes;
pub mod state;
pub mod store;
pub mod uow;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, ValidationError};
pub use migration::apply_migrations;
pub use routes::{app, camp_routes, common_routes};
pub use state::AppState;
pub use store::{connect, seed};
pub use uow::UnitOfWork;

pub const DEFAULT_LOG_FILTER: &str = "camp_signups=info,tower_http=info";

/// Install the fmt subscriber. `RUST_LOG` overrides the default directives.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
