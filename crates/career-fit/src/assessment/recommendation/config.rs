use serde::{Deserialize, Serialize};

/// Threshold rubric for the recommendation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub yes_minimum_average: f64,
    pub yes_minimum_psychometric: u8,
    pub yes_minimum_technical: u8,
    pub maybe_minimum_average: f64,
    pub maybe_minimum_psychometric: u8,
    pub maybe_minimum_technical: u8,
    /// Below this technical score a `maybe` verdict adds technical suggestions.
    pub technical_gap_below: u8,
    /// Below this psychometric score a `maybe` verdict adds interest suggestions.
    pub psychometric_gap_below: u8,
    /// Below this a will, interest or skill dimension adds its own suggestion.
    pub dimension_gap_below: u8,
    pub deduplicate_suggestions: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            yes_minimum_average: 75.0,
            yes_minimum_psychometric: 70,
            yes_minimum_technical: 60,
            maybe_minimum_average: 55.0,
            maybe_minimum_psychometric: 60,
            maybe_minimum_technical: 50,
            technical_gap_below: 60,
            psychometric_gap_below: 60,
            dimension_gap_below: 60,
            deduplicate_suggestions: false,
        }
    }
}
