pub mod football;
pub mod news;

use axum::Router;
use std::sync::Arc;

use crate::constants::routes::{FOOTBALL_PREFIX, NEWS_PREFIX};
use crate::server::state::AppState;

/// Assemble the API router.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest(FOOTBALL_PREFIX, football::routes())
        .nest(NEWS_PREFIX, news::routes())
}
