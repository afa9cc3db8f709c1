use chrono::NaiveDate;
use rust_decimal::Decimal;

use merenda_core::DateRange;

use crate::flow::{AiFlow, FlowStep};
use crate::generator::GenerationRequest;
use crate::result::AiError;
use crate::snapshot::{ConsumptionSnapshot, StockSnapshot};

pub const NO_DATA: &str = "Nenhum dado de consumo disponível para gerar o relatório.";
pub const NO_DATA_IN_PERIOD: &str = "Nenhum dado de consumo encontrado para o período selecionado.";

fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Narrative spend report over consumption records, written by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingReport {
    records: Vec<ConsumptionSnapshot>,
    stock: Vec<StockSnapshot>,
    period: DateRange,
}

impl SpendingReport {
    pub fn new(records: Vec<ConsumptionSnapshot>, stock: Vec<StockSnapshot>, period: DateRange) -> Self {
        Self {
            records,
            stock,
            period,
        }
    }

    fn in_period(&self) -> Vec<&ConsumptionSnapshot> {
        self.records
            .iter()
            .filter(|r| self.period.contains(r.date))
            .collect()
    }

    fn render(&self, selected: &[&ConsumptionSnapshot]) -> Result<String, AiError> {
        let records_json = serde_json::to_string_pretty(selected)
            .map_err(|e| AiError::InvalidInput(format!("consumption records: {e}")))?;
        let stock_json = serde_json::to_string_pretty(&self.stock)
            .map_err(|e| AiError::InvalidInput(format!("stock items: {e}")))?;
        let total = selected
            .iter()
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.total_cost));

        Ok(format!(
            "Você é analista financeiro especializado em custos de merenda escolar. Escreva um relatório \
de gastos claro e acionável, em markdown, usando somente os dados abaixo.

Período: {start} a {end}
Registros de consumo considerados: {count}
Gasto total já calculado: R$ {total}

Registros de consumo (JSON):
{records_json}

Itens em estoque, com custo unitário atual (JSON):
{stock_json}

Estrutura obrigatória:
I. Resumo executivo: período, gasto total, número de registros, custo médio por registro e 2 ou 3 destaques.
II. Análise de custos e consumo: itens de maior custo total e itens mais consumidos em quantidade (até 10 cada),
    padrões e anomalias (gastos altos inesperados, itens comprados em excesso e pouco consumidos).
III. Recomendações práticas de economia e pontos que merecem investigação, incluindo riscos de perda por validade.
IV. Conclusão breve.

Seja específico e baseie cada conclusão nos dados; não invente valores.
",
            start = display_date(self.period.start),
            end = display_date(self.period.end),
            count = selected.len(),
            total = total.round_dp(2),
        ))
    }
}

impl AiFlow for SpendingReport {
    type Output = String;

    fn name(&self) -> &'static str {
        "spending_report"
    }

    fn prepare(&self) -> Result<FlowStep<String>, AiError> {
        let selected = self.in_period();

        if selected.is_empty() {
            let message = if self.period.is_bounded() {
                NO_DATA_IN_PERIOD
            } else {
                NO_DATA
            };
            return Ok(FlowStep::Answer(message.to_string()));
        }

        let request = GenerationRequest::new(self.render(&selected)?).with_temperature(0.5);
        Ok(FlowStep::Generate(request))
    }

    fn parse(&self, text: String) -> Result<String, AiError> {
        super::non_empty_reply(text)
    }
}
