use std::collections::HashSet;

use super::super::domain::{Dimension, DimensionScore, Suggestion, SuggestionTopic};
use super::config::RecommendationConfig;

const DIMENSION_SUGGESTIONS: [(Dimension, SuggestionTopic, &str); 3] = [
    (
        Dimension::Will,
        SuggestionTopic::LongTermCommitment,
        "Consider your long-term commitment to learning complex technologies",
    ),
    (
        Dimension::Interest,
        SuggestionTopic::BlockchainInterest,
        "Explore more blockchain applications to build genuine interest",
    ),
    (
        Dimension::Skill,
        SuggestionTopic::ProgrammingFoundations,
        "Focus on building stronger programming foundations",
    ),
];

/// Targeted advice for weak will, interest and skill dimensions, in that order.
pub(crate) fn dimension_suggestions(
    profile: &DimensionScore,
    config: &RecommendationConfig,
) -> Vec<Suggestion> {
    DIMENSION_SUGGESTIONS
        .iter()
        .filter(|(dimension, _, _)| profile.get(*dimension) < config.dimension_gap_below)
        .map(|(_, topic, text)| Suggestion::new(*topic, *text))
        .collect()
}

/// Keeps the first suggestion for each topic, preserving order.
pub(crate) fn deduplicate(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|suggestion| seen.insert(suggestion.topic))
        .collect()
}

/// Distance of the average from the neutral midpoint, as a percentage.
pub(crate) fn confidence(average: f64) -> u8 {
    let distance = (average - 50.0).abs() / 50.0 * 100.0;
    super::super::scoring::round_score(distance)
}
