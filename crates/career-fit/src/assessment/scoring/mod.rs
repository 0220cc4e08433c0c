//! Reduction of raw responses into section and dimension scores.
//!
//! Every answer is first normalized onto a common 0–100 scale according to
//! its question kind, then aggregated. Missing data contributes nothing and
//! responses for unknown questions are skipped, so both scorers are total.

mod dimension;
mod section;

pub use dimension::compute_dimension_score;
pub use section::compute_section_score;

use super::domain::{AnswerValue, Question, QuestionKind};

const LIKERT_MAX_INDEX: f64 = 4.0;
const SCALE_MAX: f64 = 10.0;

/// Maps a raw answer onto 0–100. Returns `None` when the value has no numeric
/// reading. Out-of-range raw values are clamped to the scale bounds.
pub fn normalize(question: &Question, value: &AnswerValue) -> Option<f64> {
    let raw = value.as_number()?;

    let normalized = match question.kind {
        QuestionKind::Likert => raw / LIKERT_MAX_INDEX * 100.0,
        QuestionKind::Scale => raw / SCALE_MAX * 100.0,
        QuestionKind::Boolean => raw * 100.0,
        QuestionKind::MultipleChoice => match question.correct_answer {
            Some(index) if raw == index as f64 => 100.0,
            _ => 0.0,
        },
    };

    Some(normalized.clamp(0.0, 100.0))
}

/// Half-up rounding onto the integer score range.
pub(crate) fn round_score(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::Category;

    fn question(kind: QuestionKind, correct_answer: Option<usize>) -> Question {
        Question {
            id: "q",
            prompt: "prompt",
            kind,
            options: vec!["a", "b", "c", "d", "e"],
            category: Category::Technical,
            subcategory: None,
            weight: 1.0,
            correct_answer,
        }
    }

    #[test]
    fn likert_indices_map_to_quarter_steps() {
        let likert = question(QuestionKind::Likert, None);
        for raw in 0..=4u32 {
            let score = normalize(&likert, &AnswerValue::from(raw)).expect("numeric");
            assert_eq!(score, f64::from(raw * 25));
        }
    }

    #[test]
    fn scale_ratings_map_to_tens() {
        let scale = question(QuestionKind::Scale, None);
        for raw in 1..=10u32 {
            let score = normalize(&scale, &AnswerValue::from(raw)).expect("numeric");
            assert_eq!(round_score(score), (raw * 10) as u8);
        }
    }

    #[test]
    fn boolean_answers_are_all_or_nothing() {
        let boolean = question(QuestionKind::Boolean, None);
        assert_eq!(normalize(&boolean, &AnswerValue::from(true)), Some(100.0));
        assert_eq!(normalize(&boolean, &AnswerValue::from(false)), Some(0.0));
    }

    #[test]
    fn string_encoded_choices_are_parsed() {
        let likert = question(QuestionKind::Likert, None);
        assert_eq!(normalize(&likert, &AnswerValue::from("2")), Some(50.0));
        assert_eq!(normalize(&likert, &AnswerValue::from("agree")), None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let scale = question(QuestionKind::Scale, None);
        assert_eq!(normalize(&scale, &AnswerValue::from(15u32)), Some(100.0));
        assert_eq!(normalize(&scale, &AnswerValue::from(-3.0)), Some(0.0));
    }

    #[test]
    fn multiple_choice_without_correct_answer_scores_zero() {
        let unkeyed = question(QuestionKind::MultipleChoice, None);
        for raw in 0..5u32 {
            assert_eq!(normalize(&unkeyed, &AnswerValue::from(raw)), Some(0.0));
        }
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_score(72.5), 73);
        assert_eq!(round_score(72.49), 72);
        assert_eq!(round_score(0.0), 0);
    }
}
