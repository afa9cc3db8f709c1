use crate::flow::{AiFlow, FlowStep};
use crate::generator::GenerationRequest;
use crate::result::AiError;
use crate::snapshot::ConsumptionSnapshot;

pub const NO_HISTORY: &str =
    "Ainda não há histórico de consumo suficiente para sugerir ajustes na demanda.";

/// Ordering suggestions from consumption history and head count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandAdjustment {
    history: Vec<ConsumptionSnapshot>,
    student_count: u32,
}

impl DemandAdjustment {
    pub fn new(history: Vec<ConsumptionSnapshot>, student_count: u32) -> Self {
        Self {
            history,
            student_count,
        }
    }
}

impl AiFlow for DemandAdjustment {
    type Output = String;

    fn name(&self) -> &'static str {
        "demand_adjustment"
    }

    fn prepare(&self) -> Result<FlowStep<String>, AiError> {
        if self.history.is_empty() {
            return Ok(FlowStep::Answer(NO_HISTORY.to_string()));
        }

        let history = serde_json::to_string(&self.history)
            .map_err(|e| AiError::InvalidInput(format!("consumption history: {e}")))?;

        let prompt = format!(
            "Você analisa dados de consumo da merenda escolar para ajustar a previsão de demanda.
Identifique padrões, variações sazonais e sinais de excesso ou falta de estoque, levando em conta
o número de alunos.

Histórico de consumo (JSON): {history}
Número de alunos: {students}

Sugira ajustes concretos nas quantidades de ingredientes a pedir e explique o raciocínio
em um parágrafo conciso.
",
            students = self.student_count,
        );

        Ok(FlowStep::Generate(GenerationRequest::new(prompt)))
    }

    fn parse(&self, text: String) -> Result<String, AiError> {
        super::non_empty_reply(text)
    }
}
