//! Scoring rubric: weights and keyword lists for the corn-starch supply chain

use serde::{Deserialize, Serialize};
use shared::{SharedError, SharedResult};

pub const DEFAULT_TAG_KEYWORD: &str = "corn-starch";
pub const DEFAULT_TEXT_KEYWORDS: &[&str] = &["maize powder", "starch", "binder", "thickener"];
pub const DEFAULT_INGREDIENT_KEYWORD: &str = "corn starch";

/// Weights and keywords used by the scorer.
///
/// Missing fields in a rubric file fall back to the defaults, so a file may
/// override only the weights it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRubric {
    /// Substring looked for in tags only
    pub tag_keyword: String,
    pub tag_weight: u32,

    /// Substrings looked for in tags or description; awarded once
    pub text_keywords: Vec<String>,
    pub text_weight: u32,

    /// Substring looked for in product ingredients; awarded once
    pub ingredient_keyword: String,
    pub ingredient_weight: u32,
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self {
            tag_keyword: DEFAULT_TAG_KEYWORD.to_string(),
            tag_weight: 50,
            text_keywords: DEFAULT_TEXT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            text_weight: 30,
            ingredient_keyword: DEFAULT_INGREDIENT_KEYWORD.to_string(),
            ingredient_weight: 20,
        }
    }
}

impl ScoringRubric {
    /// Parse a rubric from JSON and normalize it for matching
    pub fn from_json(content: &str) -> SharedResult<Self> {
        let rubric: Self = serde_json::from_str(content)
            .map_err(|e| SharedError::DeserializationError { message: format!("rubric: {e}") })?;
        rubric.validated()
    }

    /// Lowercase every keyword and reject empty ones.
    ///
    /// An empty keyword would match every record.
    pub fn validated(self) -> SharedResult<Self> {
        checked_keyword("tag_keyword", &self.tag_keyword)?;
        checked_keyword("ingredient_keyword", &self.ingredient_keyword)?;
        for keyword in &self.text_keywords {
            checked_keyword("text_keywords", keyword)?;
        }
        Ok(self.lowercased())
    }

    /// Lowercase every keyword for case-insensitive matching
    pub fn lowercased(mut self) -> Self {
        self.tag_keyword = self.tag_keyword.to_lowercase();
        self.ingredient_keyword = self.ingredient_keyword.to_lowercase();
        for keyword in &mut self.text_keywords {
            *keyword = keyword.to_lowercase();
        }
        self
    }

    /// Highest score this rubric can award
    pub fn max_score(&self) -> u32 {
        self.tag_weight
            .saturating_add(self.text_weight)
            .saturating_add(self.ingredient_weight)
    }
}

fn checked_keyword(field: &str, keyword: &str) -> SharedResult<()> {
    if keyword.is_empty() {
        return Err(SharedError::InvalidRubric {
            field: field.to_string(),
            value: String::new(),
        });
    }
    Ok(())
}
