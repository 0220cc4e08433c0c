use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use super::catalog::{QuestionCatalog, PSYCHOMETRIC_SECTION, TECHNICAL_SECTION};
use super::domain::{
    AnswerValue, AssessmentResult, DimensionScore, Question, QuestionKind, Response, Section,
    SectionScore,
};
use super::recommendation::RecommendationEngine;
use super::responses::ResponseStore;
use super::scoring::{compute_dimension_score, compute_section_score};

/// Errors raised while driving an attempt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("question {0} is not part of the catalog")]
    UnknownQuestion(String),
    #[error("invalid answer for {question_id}: {reason}")]
    InvalidAnswer { question_id: String, reason: String },
    #[error("the current section has no question to answer")]
    NoActiveQuestion,
    #[error("question {0} must be answered before moving on")]
    Unanswered(String),
    #[error("already at the first question")]
    AtStart,
    #[error("the attempt is finished; restart to take it again")]
    AttemptFinished,
}

/// Completion state of a question section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState {
    InProgress,
    Completed(SectionScore),
}

/// Outcome of advancing past the current question.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep {
    NextQuestion,
    SectionCompleted(SectionScore),
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub section_index: usize,
    pub question_index: usize,
}

/// Single assessment attempt: navigation, answers, section scores and result.
#[derive(Debug)]
pub struct AssessmentSession {
    catalog: Arc<QuestionCatalog>,
    engine: RecommendationEngine,
    position: Position,
    responses: ResponseStore,
    section_states: BTreeMap<&'static str, SectionState>,
    started_at: DateTime<Utc>,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        engine: RecommendationEngine,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            catalog,
            engine,
            position: Position {
                section_index: 0,
                question_index: 0,
            },
            responses: ResponseStore::new(),
            section_states: BTreeMap::new(),
            started_at: now,
            result: None,
        }
    }

    /// Leaves the introduction for the first question section and restarts the clock.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.current_section().is_some_and(Section::has_questions) {
            return Ok(());
        }

        let first = self
            .next_question_section(self.position.section_index)
            .ok_or(SessionError::NoActiveQuestion)?;
        self.enter_section(first);
        self.started_at = now;
        Ok(())
    }

    /// Replaces the attempt wholesale. Nothing carries over.
    pub fn restart(&mut self, now: DateTime<Utc>) {
        info!("assessment restarted");
        *self = Self::new(Arc::clone(&self.catalog), self.engine.clone(), now);
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.catalog.sections().get(self.position.section_index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_section()?
            .questions
            .get(self.position.question_index)
    }

    pub fn current_response(&self) -> Option<&AnswerValue> {
        let question = self.current_question()?;
        self.responses.get(question.id)
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    /// Answers the question currently on screen.
    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<(), SessionError> {
        self.ensure_open()?;
        let question_id = self
            .current_question()
            .map(|question| question.id)
            .ok_or(SessionError::NoActiveQuestion)?;
        self.answer_question(question_id, value)
    }

    /// Answers any catalog question, replacing an earlier answer to it.
    ///
    /// Changing an answer in a completed section recomputes that section's score.
    pub fn answer_question(
        &mut self,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<(), SessionError> {
        self.ensure_open()?;
        let value = value.into();
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))?;
        validate_answer(question, &value)?;

        let question_id = question.id;
        let replaced = self.responses.record(Response::new(question_id, value));
        debug!(question_id, replaced = replaced.is_some(), "answer recorded");

        let completed_section = self
            .catalog
            .section_of(question_id)
            .map(|section| section.id)
            .filter(|section_id| {
                matches!(
                    self.section_states.get(section_id),
                    Some(SectionState::Completed(_))
                )
            });
        if let Some(section_id) = completed_section {
            self.complete_section(section_id);
        }

        Ok(())
    }

    /// Moves to the next question, completing the section after its last one.
    /// Completing the final question section produces the result.
    pub fn next(&mut self) -> Result<SessionStep, SessionError> {
        self.ensure_open()?;
        let (section_id, question_count) = {
            let section = self
                .current_section()
                .filter(|section| section.has_questions())
                .ok_or(SessionError::NoActiveQuestion)?;
            (section.id, section.questions.len())
        };
        let question = self.current_question().ok_or(SessionError::NoActiveQuestion)?;
        if self.responses.get(question.id).is_none() {
            return Err(SessionError::Unanswered(question.id.to_string()));
        }

        if self.position.question_index + 1 < question_count {
            self.position.question_index += 1;
            return Ok(SessionStep::NextQuestion);
        }

        let score = self.complete_section(section_id);
        match self.next_question_section(self.position.section_index) {
            Some(next) => {
                self.enter_section(next);
                Ok(SessionStep::SectionCompleted(score))
            }
            None => {
                self.generate_result();
                Ok(SessionStep::Finished)
            }
        }
    }

    /// Steps back one question, crossing into the previous question section.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.position.question_index > 0 {
            self.position.question_index -= 1;
            return Ok(());
        }

        let previous = (0..self.position.section_index)
            .rev()
            .find(|index| self.catalog.sections()[*index].has_questions())
            .ok_or(SessionError::AtStart)?;
        let last_question = self.catalog.sections()[previous]
            .questions
            .len()
            .saturating_sub(1);
        self.position = Position {
            section_index: previous,
            question_index: last_question,
        };
        Ok(())
    }

    /// Completes every open question section and produces the result.
    pub fn finish(&mut self) -> Result<&AssessmentResult, SessionError> {
        self.ensure_open()?;
        let pending: Vec<&'static str> = self
            .catalog
            .sections()
            .iter()
            .filter(|section| section.has_questions())
            .filter(|section| {
                !matches!(
                    self.section_states.get(section.id),
                    Some(SectionState::Completed(_))
                )
            })
            .map(|section| section.id)
            .collect();
        for section_id in pending {
            self.complete_section(section_id);
        }

        Ok(self.generate_result())
    }

    pub fn section_state(&self, section_id: &str) -> Option<&SectionState> {
        self.section_states.get(section_id)
    }

    pub fn section_score(&self, section_id: &str) -> Option<&SectionScore> {
        match self.section_states.get(section_id) {
            Some(SectionState::Completed(score)) => Some(score),
            _ => None,
        }
    }

    /// Completed section scores in catalog order.
    pub fn section_scores(&self) -> Vec<&SectionScore> {
        self.catalog
            .sections()
            .iter()
            .filter_map(|section| self.section_score(section.id))
            .collect()
    }

    pub fn dimension_score(&self) -> DimensionScore {
        compute_dimension_score(&self.catalog, self.responses.as_slice())
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        (now - self.started_at).max(Duration::zero())
    }

    /// Advisory only; the attempt is never cut off.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        let budget = Duration::minutes(i64::from(self.catalog.total_estimated_minutes()));
        (budget - self.elapsed(now)).max(Duration::zero())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.result.is_some() {
            Err(SessionError::AttemptFinished)
        } else {
            Ok(())
        }
    }

    fn next_question_section(&self, after: usize) -> Option<usize> {
        self.catalog
            .sections()
            .iter()
            .enumerate()
            .skip(after + 1)
            .find(|(_, section)| section.has_questions())
            .map(|(index, _)| index)
    }

    fn enter_section(&mut self, section_index: usize) {
        self.position = Position {
            section_index,
            question_index: 0,
        };
        if let Some(section) = self.catalog.sections().get(section_index) {
            self.section_states
                .entry(section.id)
                .or_insert(SectionState::InProgress);
        }
    }

    fn complete_section(&mut self, section_id: &'static str) -> SectionScore {
        let score = compute_section_score(&self.catalog, section_id, self.responses.as_slice());
        info!(section_id, score = score.score, "section completed");
        self.section_states
            .insert(section_id, SectionState::Completed(score.clone()));
        score
    }

    fn generate_result(&mut self) -> &AssessmentResult {
        let psychometric = self
            .section_score(PSYCHOMETRIC_SECTION)
            .map_or(0, |score| score.score);
        let technical = self
            .section_score(TECHNICAL_SECTION)
            .map_or(0, |score| score.score);
        let dimensions = self.dimension_score();

        let result = self.engine.evaluate(psychometric, technical, &dimensions);
        info!(
            recommendation = ?result.recommendation,
            confidence = result.confidence_score,
            "assessment result generated"
        );

        if let Some(last) = self.catalog.sections().len().checked_sub(1) {
            self.position = Position {
                section_index: last,
                question_index: 0,
            };
        }
        self.result.insert(result)
    }
}

/// Checks a raw answer against the question's answer contract.
pub fn validate_answer(question: &Question, value: &AnswerValue) -> Result<(), SessionError> {
    let invalid = |reason: String| SessionError::InvalidAnswer {
        question_id: question.id.to_string(),
        reason,
    };

    let raw = value
        .as_number()
        .ok_or_else(|| invalid("answer is not a number".to_string()))?;
    if raw.fract() != 0.0 {
        return Err(invalid(format!("{raw} is not a whole number")));
    }

    match question.kind {
        QuestionKind::Likert | QuestionKind::MultipleChoice => {
            if raw < 0.0 || raw >= question.options.len() as f64 {
                return Err(invalid(format!(
                    "option {raw} is outside 0..{}",
                    question.options.len()
                )));
            }
        }
        QuestionKind::Scale => {
            if !(1.0..=10.0).contains(&raw) {
                return Err(invalid(format!("rating {raw} is outside 1..=10")));
            }
        }
        QuestionKind::Boolean => {
            if raw != 0.0 && raw != 1.0 {
                return Err(invalid(format!("{raw} is not 0 or 1")));
            }
        }
    }

    Ok(())
}
