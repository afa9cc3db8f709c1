use tracing::{info, instrument, warn};

use crate::flow::{AiFlow, FlowStep};
use crate::generator::TextGenerator;
use crate::result::AiError;

/// Runs flows against a text generator.
#[derive(Debug, Clone)]
pub struct FlowRunner<G> {
    generator: G,
}

impl<G> FlowRunner<G>
where
    G: TextGenerator,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    #[instrument(skip_all, fields(flow = flow.name()))]
    pub async fn run<F: AiFlow>(&self, flow: &F) -> Result<F::Output, AiError> {
        let request = match flow.prepare()? {
            FlowStep::Answer(output) => {
                info!("flow answered without calling the model");
                return Ok(output);
            }
            FlowStep::Generate(request) => request,
        };

        let text = match self.generator.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "text generation failed");
                return Err(e);
            }
        };

        info!(reply_chars = text.chars().count(), "model replied");
        flow.parse(text)
    }
}
