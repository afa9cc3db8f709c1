use serde::{Deserialize, Serialize};

use crate::flow::{AiFlow, FlowStep};
use crate::generator::GenerationRequest;
use crate::result::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
}

impl MealType {
    fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "café da manhã",
            MealType::Lunch => "almoço",
            MealType::Snack => "lanche",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub main_ingredients: String,
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
    pub number_of_students: u32,
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    /// Markdown.
    pub instructions: String,
    #[serde(default)]
    pub preparation_time: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<String>,
    #[serde(default)]
    pub nutritional_notes: Option<String>,
}

/// Structured recipe generation for a given number of students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFlow {
    request: RecipeRequest,
}

impl RecipeFlow {
    pub fn new(request: RecipeRequest) -> Self {
        Self { request }
    }

    fn validate(&self) -> Result<(), AiError> {
        if self.request.main_ingredients.trim().chars().count() < 3 {
            return Err(AiError::InvalidInput(
                "describe the main ingredients (at least 3 characters)".to_string(),
            ));
        }
        if self.request.number_of_students == 0 {
            return Err(AiError::InvalidInput(
                "number of students must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn render(&self) -> String {
        let r = &self.request;
        let restrictions = r
            .dietary_restrictions
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Nenhuma");

        let mut prompt = format!(
            "Você é chef e nutricionista especializado em merenda escolar. Crie uma receita nutritiva, \
barata, fácil de preparar em grande quantidade e que agrade crianças e adolescentes.

Ingredientes principais: {ingredients}
Restrições alimentares: {restrictions}
Número de alunos: {students}
",
            ingredients = r.main_ingredients.trim(),
            students = r.number_of_students,
        );
        if let Some(meal) = r.meal_type {
            prompt.push_str(&format!("Tipo de refeição: {}\n", meal.label()));
        }

        prompt.push_str(
            "
Ajuste as quantidades para o número de alunos. Prefira ingredientes comuns e evite ultraprocessados.
Se houver restrição alimentar, cumpra-a à risca.

Responda apenas com um objeto JSON, sem texto antes ou depois, com as chaves:
- \"recipeName\": string
- \"description\": string curta
- \"ingredients\": lista de objetos {\"name\": string, \"quantity\": string}
- \"instructions\": passo a passo em markdown
- \"preparationTime\": string (opcional)
- \"cookingTime\": string (opcional)
- \"nutritionalNotes\": string (opcional)
",
        );
        prompt
    }
}

impl AiFlow for RecipeFlow {
    type Output = Recipe;

    fn name(&self) -> &'static str {
        "generate_recipe"
    }

    fn prepare(&self) -> Result<FlowStep<Recipe>, AiError> {
        self.validate()?;
        Ok(FlowStep::Generate(GenerationRequest::new(self.render())))
    }

    fn parse(&self, text: String) -> Result<Recipe, AiError> {
        let json = extract_json_object(&text)
            .ok_or_else(|| AiError::Parse("no JSON object in reply".to_string()))?;
        let recipe: Recipe =
            serde_json::from_str(json).map_err(|e| AiError::Parse(e.to_string()))?;

        if recipe.recipe_name.trim().is_empty() || recipe.ingredients.is_empty() {
            return Err(AiError::Parse(
                "recipe is missing a name or ingredients".to_string(),
            ));
        }
        Ok(recipe)
    }
}

/// Slice from the first `{` to the last `}`; tolerates markdown fences and
/// chatter around the object.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
