//! AI provider wiring.

pub mod gemini;
pub mod snapshots;

use std::sync::Arc;

use merenda_ai::{TextGenerator, UnavailableGenerator};
use tracing::{info, warn};

use crate::config::AiConfig;

pub use gemini::{GeminiClient, GeminiError};

/// Build the text generator for `config`.
///
/// `None` means no API key is configured and the AI features are switched off.
/// A client that fails to build still yields a generator, one that reports every
/// call as unavailable.
pub fn text_generator(config: &AiConfig) -> Option<Arc<dyn TextGenerator>> {
    let Some(api_key) = config.api_key.clone() else {
        warn!("no AI API key configured; AI routes will answer 503");
        return None;
    };

    let generator: Arc<dyn TextGenerator> = match GeminiClient::new(api_key, config.model.clone()) {
        Ok(client) => {
            info!(model = %config.model, "gemini client ready");
            Arc::new(client)
        }
        Err(e) => {
            warn!(error = %e, "failed to build gemini client; AI features disabled");
            Arc::new(UnavailableGenerator::new("AI provider failed to initialize"))
        }
    };
    Some(generator)
}
