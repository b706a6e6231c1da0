use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a recipe-analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub ingredients: Vec<String>,
}

/// Body of a successful recipe-analysis response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Missing, `null` and non-array values all mean "no suggestions"
    #[serde(default, deserialize_with = "lenient_recipes")]
    pub recipes: Vec<Recipe>,
}

impl AnalyzeResponse {
    /// Decode a success body. Anything that isn't a JSON object carrying
    /// `recipes` yields an empty response rather than an error.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|e| {
            warn!("Recipe service body is not a recipe list: {}", e);
            Self::default()
        })
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

/// Body the service sends alongside a non-success status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of the service health check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// A recipe suggestion as returned by the service.
///
/// The service owns the content; nothing here is validated. Missing or
/// `null` fields fall back to empty values and scalar values are taken as
/// text, so a partial suggestion still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cooking_time: String,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::from_label(&self.difficulty)
    }

    /// Plain-text rendering of the recipe card
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} [{}]\n", self.name, self.difficulty));
        if !self.description.is_empty() {
            output.push_str(&format!("{}\n", self.description));
        }
        if !self.cooking_time.is_empty() {
            output.push_str(&format!("Cooking time: {}\n", self.cooking_time));
        }

        output.push_str("\nIngredients:\n");
        for ingredient in &self.ingredients {
            output.push_str(&format!("- {}\n", ingredient));
        }

        output.push_str("\nInstructions:\n");
        for (idx, step) in self.instructions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", idx + 1, step));
        }

        output
    }
}

/// Difficulty label of a recipe, used to pick the badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Anything the service sends that isn't one of the above
    Other,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other,
        }
    }

    /// Badge colour as a CSS hex string
    pub fn badge_color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "#28a745",
            Difficulty::Medium => "#ffc107",
            Difficulty::Hard => "#dc3545",
            Difficulty::Other => "#6c757d",
        }
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// An array keeps its scalar items; a lone scalar becomes a one-item list
fn lenient_text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

fn lenient_recipes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Recipe>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Recipe>(item) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!("Skipping recipe suggestion that is not an object: {}", e);
                None
            }
        })
        .collect())
}
