//! Lead scoring
//!
//! A score is the sum of three independently awarded components. Matching is
//! case-insensitive literal substring containment, so "non-starch" contains
//! "starch". Each component is awarded at most once per record.

use shared::NormalizedRecord;

use super::rubric::ScoringRubric;

/// Per-component awards for one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub tag_match: u32,
    pub keyword_match: u32,
    pub ingredient_match: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.tag_match
            .saturating_add(self.keyword_match)
            .saturating_add(self.ingredient_match)
    }
}

/// Scores normalized records against a rubric
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    rubric: ScoringRubric,
}

impl Scorer {
    /// Create a scorer; rubric keywords are lowercased here
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric: rubric.lowercased() }
    }

    pub fn score(&self, record: &NormalizedRecord) -> u32 {
        self.breakdown(record).total()
    }

    pub fn breakdown(&self, record: &NormalizedRecord) -> ScoreBreakdown {
        let rubric = &self.rubric;
        let tags = record.tags.to_lowercase();
        let description = record.description.to_lowercase();
        let mut breakdown = ScoreBreakdown::default();

        if tags.contains(rubric.tag_keyword.as_str()) {
            breakdown.tag_match = rubric.tag_weight;
        }

        if rubric
            .text_keywords
            .iter()
            .any(|keyword| tags.contains(keyword.as_str()) || description.contains(keyword.as_str()))
        {
            breakdown.keyword_match = rubric.text_weight;
        }

        let has_ingredient = record.products.iter().any(|product| {
            product.ingredients.iter().any(|ingredient| {
                ingredient
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(rubric.ingredient_keyword.as_str())
            })
        });
        if has_ingredient {
            breakdown.ingredient_match = rubric.ingredient_weight;
        }

        breakdown
    }
}

/// Score a record with the default rubric
pub fn score_lead(record: &NormalizedRecord) -> u32 {
    Scorer::default().score(record)
}
