use std::collections::BTreeMap;

use tracing::trace;

use super::super::catalog::{QuestionCatalog, DIMENSION_PREFIX};
use super::super::domain::{Dimension, DimensionScore, Response};
use super::{normalize, round_score};

/// Six-axis readiness profile from the dimension-tagged responses.
///
/// Each dimension is the rounded mean of its normalized answers, or 0 when
/// nothing was answered for it. `overall` averages all six, empty ones included.
pub fn compute_dimension_score(
    catalog: &QuestionCatalog,
    responses: &[Response],
) -> DimensionScore {
    let mut groups: BTreeMap<Dimension, Vec<f64>> = BTreeMap::new();

    for response in responses
        .iter()
        .filter(|response| response.question_id.starts_with(DIMENSION_PREFIX))
    {
        let Some(question) = catalog.question(&response.question_id) else {
            trace!(question_id = %response.question_id, "unknown dimension question");
            continue;
        };
        let Some(dimension) = question.subcategory.and_then(Dimension::from_subcategory) else {
            continue;
        };
        let Some(normalized) = normalize(question, &response.value) else {
            continue;
        };

        groups.entry(dimension).or_default().push(normalized);
    }

    let mut profile = DimensionScore::default();
    let mut total = 0u32;

    for dimension in Dimension::ordered() {
        let score = match groups.get(&dimension) {
            Some(values) if !values.is_empty() => {
                round_score(values.iter().sum::<f64>() / values.len() as f64)
            }
            _ => 0,
        };
        profile.set(dimension, score);
        total += u32::from(score);
    }

    profile.overall = round_score(f64::from(total) / Dimension::ordered().len() as f64);
    profile
}
