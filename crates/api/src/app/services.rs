use std::sync::Arc;

use anyhow::Context;
use axum::http::StatusCode;

use merenda_ai::{FlowRunner, TextGenerator};
use merenda_infra::{BlobStore, LedgerService, open_store};

use crate::app::errors;
use crate::config::ApiConfig;
use crate::session::{AdminCredentials, SessionStore};

pub type SharedStore = Arc<dyn BlobStore>;
pub type SharedGenerator = Arc<dyn TextGenerator>;

pub struct AppServices {
    pub ledger: LedgerService<SharedStore>,
    /// `None` when no AI provider is configured.
    pub ai: Option<FlowRunner<SharedGenerator>>,
    pub sessions: Arc<SessionStore>,
}

impl AppServices {
    pub async fn new(
        store: SharedStore,
        generator: Option<SharedGenerator>,
        credentials: AdminCredentials,
    ) -> Self {
        Self {
            ledger: LedgerService::open(store).await,
            ai: generator.map(FlowRunner::new),
            sessions: Arc::new(SessionStore::new(credentials)),
        }
    }

    /// The AI runner, or a 503 response when AI is switched off.
    pub fn ai(&self) -> Result<&FlowRunner<SharedGenerator>, axum::response::Response> {
        self.ai.as_ref().ok_or_else(|| {
            errors::json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "ai_unavailable",
                "AI features are not configured",
            )
        })
    }
}

pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let store = open_store(&config.store)
        .await
        .context("failed to open blob store")?;

    let generator = merenda_infra::ai::text_generator(&config.ai);

    Ok(AppServices::new(store, generator, config.admin.clone()).await)
}
