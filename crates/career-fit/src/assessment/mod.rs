//! Career-fit assessment: question catalog, response collection, scoring and
//! the rule-based recommendation.
//!
//! The scorers and the recommendation engine are pure functions of their
//! inputs. [`AssessmentSession`] owns the mutable state of one attempt and is
//! the only thing a presentation layer needs to drive.

pub mod catalog;
pub mod domain;
pub mod recommendation;
pub mod responses;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog, DIMENSION_PREFIX};
pub use domain::{
    AnswerValue, AssessmentResult, Category, Dimension, DimensionScore, Question, QuestionKind,
    Recommendation, Response, Section, SectionScore, Suggestion, SuggestionTopic,
};
pub use recommendation::{RecommendationConfig, RecommendationEngine};
pub use responses::ResponseStore;
pub use scoring::{compute_dimension_score, compute_section_score, normalize};
pub use session::{AssessmentSession, Position, SectionState, SessionError, SessionStep};
