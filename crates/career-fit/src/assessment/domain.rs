use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a question is answered and therefore how its raw value is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// 0-based index into a five point agreement scale.
    Likert,
    /// 0-based option index, scored against the question's correct answer.
    MultipleChoice,
    /// 0 or 1.
    Boolean,
    /// Integer rating from 1 to 10.
    Scale,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Likert => "likert",
            Self::MultipleChoice => "multiple-choice",
            Self::Boolean => "boolean",
            Self::Scale => "scale",
        }
    }

    pub const fn requires_options(self) -> bool {
        matches!(self, Self::Likert | Self::MultipleChoice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Interest,
    Personality,
    Cognitive,
    Motivation,
    Technical,
    Aptitude,
    WiscarFramework,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest => "Interest",
            Self::Personality => "Personality",
            Self::Cognitive => "Cognitive",
            Self::Motivation => "Motivation",
            Self::Technical => "Technical",
            Self::Aptitude => "Aptitude",
            Self::WiscarFramework => "WISCAR Framework",
        }
    }
}

/// Immutable catalog entry presented to the candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<&'static str>,
    pub category: Category,
    pub subcategory: Option<&'static str>,
    pub weight: f64,
    /// Index of the right option for multiple-choice knowledge checks.
    pub correct_answer: Option<usize>,
}

/// Themed, ordered group of questions. Navigation-only sections carry no questions.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: Vec<Question>,
    pub estimated_minutes: u32,
}

impl Section {
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.questions.iter().any(|question| question.id == question_id)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }
}

/// Raw answered value: a number, or a choice index encoded as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Choice(String),
}

impl AnswerValue {
    /// Numeric reading of the answer; `None` when a string does not parse.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) if value.is_finite() => Some(*value),
            AnswerValue::Number(_) => None,
            AnswerValue::Choice(raw) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<u32> for AnswerValue {
    fn from(value: u32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Number(if value { 1.0 } else { 0.0 })
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Choice(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: String,
    pub value: AnswerValue,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section_id: String,
    pub score: u8,
    /// Mean normalized score per subcategory, unrounded.
    pub sub_scores: BTreeMap<String, f64>,
}

impl SectionScore {
    pub fn empty(section_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            score: 0,
            sub_scores: BTreeMap::new(),
        }
    }
}

/// The six readiness axes of the WISCAR framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive Readiness",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Alignment",
        }
    }

    /// Resolves a question subcategory tag to its dimension.
    pub fn from_subcategory(tag: &str) -> Option<Self> {
        match tag {
            "will" => Some(Self::Will),
            "interest" => Some(Self::Interest),
            "skill" => Some(Self::Skill),
            "cognitive" => Some(Self::Cognitive),
            "ability" => Some(Self::Ability),
            "real_world" => Some(Self::RealWorld),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
    pub overall: u8,
}

impl DimensionScore {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }

    pub(crate) fn set(&mut self, dimension: Dimension, score: u8) {
        let slot = match dimension {
            Dimension::Will => &mut self.will,
            Dimension::Interest => &mut self.interest,
            Dimension::Skill => &mut self.skill,
            Dimension::Cognitive => &mut self.cognitive,
            Dimension::Ability => &mut self.ability,
            Dimension::RealWorld => &mut self.real_world,
        };
        *slot = score;
    }

    pub fn entries(&self) -> [(Dimension, u8); 6] {
        Dimension::ordered().map(|dimension| (dimension, self.get(dimension)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Recommended",
            Self::Maybe => "Consider with preparation",
            Self::No => "Not recommended",
        }
    }
}

/// Theme of a suggestion. Different rules can emit advice on the same theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionTopic {
    ProgrammingFoundations,
    BlockchainConcepts,
    BlockchainInterest,
    LogicalReasoning,
    LongTermCommitment,
    AlternativeFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub topic: SuggestionTopic,
    pub text: String,
}

impl Suggestion {
    pub fn new(topic: SuggestionTopic, text: impl Into<String>) -> Self {
        Self {
            topic,
            text: text.into(),
        }
    }
}

/// Final verdict for an attempt. Produced once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub dimension_score: DimensionScore,
    pub recommendation: Recommendation,
    pub confidence_score: u8,
    pub feedback: String,
    pub suggestions: Vec<Suggestion>,
    pub learning_path: Vec<String>,
    pub career_paths: Vec<String>,
}
