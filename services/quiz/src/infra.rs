use career_fit::assessment::{
    AssessmentResult, AssessmentSession, QuestionCatalog, RecommendationConfig,
    RecommendationEngine, Response, SessionError,
};
use career_fit::config::AssessmentConfig;
use career_fit::error::AppError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Answer files come either wrapped in a `responses` object or as a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    Wrapped { responses: Vec<Response> },
    Bare(Vec<Response>),
}

impl AnswerFile {
    fn into_responses(self) -> Vec<Response> {
        match self {
            AnswerFile::Wrapped { responses } | AnswerFile::Bare(responses) => responses,
        }
    }
}

pub(crate) fn parse_answers(raw: &str) -> Result<Vec<Response>, AppError> {
    let file: AnswerFile = serde_json::from_str(raw)?;
    Ok(file.into_responses())
}

pub(crate) fn load_answers(path: &Path) -> Result<Vec<Response>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_answers(&raw)
}

pub(crate) fn recommendation_config(config: &AssessmentConfig) -> RecommendationConfig {
    RecommendationConfig {
        deduplicate_suggestions: config.deduplicate_suggestions,
        ..RecommendationConfig::default()
    }
}

/// Fresh attempt over the validated standard catalog.
pub(crate) fn build_session(
    config: &AssessmentConfig,
    now: DateTime<Utc>,
) -> Result<AssessmentSession, AppError> {
    let catalog = QuestionCatalog::standard();
    catalog.validate()?;
    let engine = RecommendationEngine::new(recommendation_config(config));
    Ok(AssessmentSession::new(Arc::new(catalog), engine, now))
}

/// Records every response and finishes the attempt. Responses to questions the
/// catalog does not know are skipped; malformed answers are rejected.
pub(crate) fn score_responses(
    session: &mut AssessmentSession,
    responses: Vec<Response>,
) -> Result<AssessmentResult, AppError> {
    for response in responses {
        match session.answer_question(&response.question_id, response.value) {
            Ok(()) => {}
            Err(SessionError::UnknownQuestion(question_id)) => {
                warn!(%question_id, "skipping answer for unknown question");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(session.finish()?.clone())
}
