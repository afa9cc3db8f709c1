use crate::generator::GenerationRequest;
use crate::result::AiError;

/// What a flow wants to do once its input has been checked.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStep<O> {
    /// Send this request to the text generator.
    Generate(GenerationRequest),
    /// Answer directly without calling the model (e.g. nothing to report on).
    Answer(O),
}

/// One AI interaction: prompt rendering plus reply parsing.
///
/// Flows are pure: they never perform IO themselves. The
/// [`FlowRunner`](crate::FlowRunner) owns the generator call.
pub trait AiFlow: Send + Sync {
    type Output: Send;

    /// Stable flow name, used in logs.
    fn name(&self) -> &'static str;

    /// Validate input and decide whether to call the model.
    fn prepare(&self) -> Result<FlowStep<Self::Output>, AiError>;

    /// Interpret the raw model reply.
    fn parse(&self, text: String) -> Result<Self::Output, AiError>;
}
