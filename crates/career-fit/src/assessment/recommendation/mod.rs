mod config;
mod policy;
mod rules;

pub use config::RecommendationConfig;

use super::domain::{AssessmentResult, DimensionScore};
use policy::decide_verdict;
use tracing::debug;

/// Aggregate inputs the threshold rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreInputs {
    pub psychometric: u8,
    pub technical: u8,
    pub dimension_overall: u8,
    pub average: f64,
}

impl ScoreInputs {
    fn new(psychometric: u8, technical: u8, dimension_overall: u8) -> Self {
        let average = (f64::from(psychometric) + f64::from(technical) + f64::from(dimension_overall))
            / 3.0;
        Self {
            psychometric,
            technical,
            dimension_overall,
            average,
        }
    }
}

/// Stateless engine turning the three aggregate scores into a verdict.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        psychometric: u8,
        technical: u8,
        dimensions: &DimensionScore,
    ) -> AssessmentResult {
        let inputs = ScoreInputs::new(psychometric, technical, dimensions.overall);
        let verdict = decide_verdict(&inputs, &self.config);

        let mut suggestions = verdict.suggestions;
        suggestions.extend(rules::dimension_suggestions(dimensions, &self.config));
        if self.config.deduplicate_suggestions {
            suggestions = rules::deduplicate(suggestions);
        }

        let confidence_score = rules::confidence(inputs.average);

        debug!(
            psychometric,
            technical,
            dimension_overall = inputs.dimension_overall,
            average = inputs.average,
            recommendation = ?verdict.recommendation,
            confidence_score,
            "recommendation evaluated"
        );

        AssessmentResult {
            psychometric_score: psychometric,
            technical_score: technical,
            dimension_score: *dimensions,
            recommendation: verdict.recommendation,
            confidence_score,
            feedback: verdict.feedback.to_string(),
            suggestions,
            learning_path: verdict.learning_path.iter().map(|step| step.to_string()).collect(),
            career_paths: verdict.career_paths.iter().map(|path| path.to_string()).collect(),
        }
    }
}
