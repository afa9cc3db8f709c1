use serde::{Deserialize, Serialize};

use crate::flow::{AiFlow, FlowStep};
use crate::generator::GenerationRequest;
use crate::result::AiError;

const PERSONA: &str = "\
Você é o MerendaBot, assistente do sistema Merenda Inteligente de gestão de merenda escolar.
Ajude com dúvidas sobre estoque, consumo, cardápios e uso do sistema.
Responda de forma curta e objetiva, em português. Use o histórico da conversa quando houver.
Se não souber a resposta ou a pergunta fugir do tema, diga isso com educação; nunca invente dados.";

const RECIPE_IDEAS_PREFIX: &str = "Gostaria de ideias de receitas.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    fn label(self) -> &'static str {
        match self {
            ChatRole::User => "Usuário",
            ChatRole::Model => "Assistente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Free-form assistant chat with an optional transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralChat {
    user_input: String,
    history: Vec<ChatMessage>,
}

impl GeneralChat {
    pub fn new(user_input: impl Into<String>, history: Vec<ChatMessage>) -> Self {
        Self {
            user_input: user_input.into(),
            history,
        }
    }

    /// Same assistant, steered towards recipe suggestions.
    pub fn recipe_ideas(user_input: impl AsRef<str>, history: Vec<ChatMessage>) -> Self {
        Self::new(
            format!("{RECIPE_IDEAS_PREFIX} {}", user_input.as_ref().trim()),
            history,
        )
    }

    fn render(&self) -> String {
        let mut lines = vec![PERSONA.to_string()];

        if !self.history.is_empty() {
            lines.push(String::new());
            lines.push("Histórico da conversa:".to_string());
            lines.extend(
                self.history
                    .iter()
                    .map(|m| format!("{}: {}", m.role.label(), m.text)),
            );
        }

        lines.push(String::new());
        lines.push(format!("{}: {}", ChatRole::User.label(), self.user_input.trim()));
        lines.push(format!("{}:", ChatRole::Model.label()));
        lines.join("\n")
    }
}

impl AiFlow for GeneralChat {
    type Output = String;

    fn name(&self) -> &'static str {
        "general_chat"
    }

    fn prepare(&self) -> Result<FlowStep<String>, AiError> {
        if self.user_input.trim().is_empty() {
            return Err(AiError::InvalidInput("message cannot be empty".to_string()));
        }
        Ok(FlowStep::Generate(GenerationRequest::new(self.render())))
    }

    fn parse(&self, text: String) -> Result<String, AiError> {
        super::non_empty_reply(text)
    }
}
