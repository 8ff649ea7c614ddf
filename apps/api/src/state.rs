use sqlx::PgPool;

use crate::identity::IdentityClient;
use crate::llm_client::LlmClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub identity: IdentityClient,
    pub llm: LlmClient,
    pub sessions: SessionStore,
}
