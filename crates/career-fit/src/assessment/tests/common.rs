use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{
    Category, DimensionScore, Question, QuestionKind, Response, Section,
};
use crate::assessment::recommendation::{RecommendationConfig, RecommendationEngine};
use crate::assessment::session::AssessmentSession;

pub(super) fn catalog() -> Arc<QuestionCatalog> {
    Arc::new(QuestionCatalog::standard())
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RecommendationConfig::default())
}

pub(super) fn started_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn session() -> AssessmentSession {
    AssessmentSession::new(catalog(), engine(), started_at())
}

pub(super) fn started_session() -> AssessmentSession {
    let mut session = session();
    session.start(started_at()).expect("attempt starts");
    session
}

/// Answers for every catalog question: one likert index, one scale rating,
/// and either the right or a wrong option for each knowledge check.
pub(super) fn uniform_responses(
    catalog: &QuestionCatalog,
    likert: u32,
    rating: u32,
    knowledge_correct: bool,
) -> Vec<Response> {
    catalog
        .sections()
        .iter()
        .flat_map(|section| &section.questions)
        .map(|question| {
            let value = match question.kind {
                QuestionKind::Likert => likert,
                QuestionKind::Scale => rating,
                QuestionKind::Boolean => u32::from(likert > 0),
                QuestionKind::MultipleChoice => {
                    let correct = question.correct_answer.unwrap_or(0) as u32;
                    if knowledge_correct {
                        correct
                    } else {
                        (correct + 1) % question.options.len() as u32
                    }
                }
            };
            Response::new(question.id, value)
        })
        .collect()
}

/// Profile with the given dimension scores and the matching rounded overall.
pub(super) fn dimensions(scores: [u8; 6]) -> DimensionScore {
    let total: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    DimensionScore {
        will: scores[0],
        interest: scores[1],
        skill: scores[2],
        cognitive: scores[3],
        ability: scores[4],
        real_world: scores[5],
        overall: ((f64::from(total) / 6.0) + 0.5).floor() as u8,
    }
}

pub(super) fn question(id: &'static str, kind: QuestionKind, subcategory: &'static str) -> Question {
    Question {
        id,
        prompt: "Sample prompt",
        kind,
        options: match kind {
            QuestionKind::Likert => vec!["1", "2", "3", "4", "5"],
            QuestionKind::MultipleChoice => vec!["a", "b", "c"],
            QuestionKind::Boolean | QuestionKind::Scale => Vec::new(),
        },
        category: Category::Aptitude,
        subcategory: Some(subcategory),
        weight: 1.0,
        correct_answer: None,
    }
}

pub(super) fn single_section_catalog(questions: Vec<Question>) -> QuestionCatalog {
    QuestionCatalog::from_sections(vec![Section {
        id: "custom",
        title: "Custom",
        description: "Ad-hoc section",
        questions,
        estimated_minutes: 3,
    }])
}
