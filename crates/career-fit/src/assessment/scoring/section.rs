use std::collections::BTreeMap;

use tracing::trace;

use super::super::catalog::QuestionCatalog;
use super::super::domain::{Response, SectionScore};
use super::{normalize, round_score};

#[derive(Default)]
struct Tally {
    sum: f64,
    count: u32,
}

/// Weighted 0–100 score for one section plus unweighted per-subcategory means.
///
/// Unknown sections, sections without questions, and sections with no matching
/// responses all score 0 with no sub-scores.
pub fn compute_section_score(
    catalog: &QuestionCatalog,
    section_id: &str,
    responses: &[Response],
) -> SectionScore {
    let Some(section) = catalog.section(section_id) else {
        trace!(section_id, "unknown section scored as empty");
        return SectionScore::empty(section_id);
    };

    let mut weighted_total = 0.0;
    let mut weight_total = 0.0;
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();

    for response in responses {
        let Some(question) = section.question(&response.question_id) else {
            continue;
        };
        let Some(normalized) = normalize(question, &response.value) else {
            trace!(
                question_id = %response.question_id,
                "skipping response without a numeric value"
            );
            continue;
        };

        weighted_total += normalized * question.weight;
        weight_total += question.weight;

        if let Some(subcategory) = question.subcategory {
            let tally = tallies.entry(subcategory).or_default();
            tally.sum += normalized;
            tally.count += 1;
        }
    }

    let score = if weight_total > 0.0 {
        round_score(weighted_total / weight_total)
    } else {
        0
    };

    let sub_scores = tallies
        .into_iter()
        .map(|(subcategory, tally)| (subcategory.to_string(), tally.sum / f64::from(tally.count)))
        .collect();

    SectionScore {
        section_id: section_id.to_string(),
        score,
        sub_scores,
    }
}
