use sqlx::PgPool;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The expansion engine itself is stateless and lives outside
/// this struct; renders only need the pool to fetch their inputs.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    #[allow(dead_code)]
    pub config: Config,
}
