use std::collections::HashSet;

use super::domain::{Category, Question, QuestionKind, Section};

/// Question ids carrying this prefix feed the WISCAR dimension profile.
pub const DIMENSION_PREFIX: &str = "wiscar_";

pub const PSYCHOMETRIC_SECTION: &str = "psychometric";
pub const TECHNICAL_SECTION: &str = "technical";
pub const DIMENSION_SECTION: &str = "wiscar";

const AGREEMENT: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Static catalog problems detected by [`QuestionCatalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question id {0} appears more than once")]
    DuplicateQuestion(String),
    #[error("{kind} question {question_id} has no options")]
    MissingOptions {
        question_id: String,
        kind: &'static str,
    },
    #[error("question {0} must carry a positive weight")]
    InvalidWeight(String),
    #[error("multiple-choice question {0} has no correct answer")]
    MissingCorrectAnswer(String),
    #[error("correct answer {index} of question {question_id} is outside its {options} options")]
    CorrectAnswerOutOfRange {
        question_id: String,
        index: usize,
        options: usize,
    },
}

#[derive(Debug)]
pub struct QuestionCatalog {
    sections: Vec<Section>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            sections: standard_sections(),
        }
    }

    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.id == section_id)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.sections
            .iter()
            .find_map(|section| section.question(question_id))
    }

    pub fn section_of(&self, question_id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.contains(question_id))
    }

    pub fn total_estimated_minutes(&self) -> u32 {
        self.sections
            .iter()
            .map(|section| section.estimated_minutes)
            .sum()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for question in self.sections.iter().flat_map(|section| &section.questions) {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id.to_string()));
            }

            if question.kind.requires_options() && question.options.is_empty() {
                return Err(CatalogError::MissingOptions {
                    question_id: question.id.to_string(),
                    kind: question.kind.label(),
                });
            }

            if !(question.weight.is_finite() && question.weight > 0.0) {
                return Err(CatalogError::InvalidWeight(question.id.to_string()));
            }

            if question.kind == QuestionKind::MultipleChoice {
                let index = question
                    .correct_answer
                    .ok_or_else(|| CatalogError::MissingCorrectAnswer(question.id.to_string()))?;
                if index >= question.options.len() {
                    return Err(CatalogError::CorrectAnswerOutOfRange {
                        question_id: question.id.to_string(),
                        index,
                        options: question.options.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn likert(
    id: &'static str,
    prompt: &'static str,
    category: Category,
    subcategory: &'static str,
    weight: f64,
) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::Likert,
        options: AGREEMENT.to_vec(),
        category,
        subcategory: Some(subcategory),
        weight,
        correct_answer: None,
    }
}

fn scale(
    id: &'static str,
    prompt: &'static str,
    category: Category,
    subcategory: &'static str,
    weight: f64,
) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::Scale,
        options: Vec::new(),
        category,
        subcategory: Some(subcategory),
        weight,
        correct_answer: None,
    }
}

fn knowledge_check(
    id: &'static str,
    prompt: &'static str,
    options: Vec<&'static str>,
    correct_answer: usize,
    subcategory: &'static str,
    weight: f64,
) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::MultipleChoice,
        options,
        category: Category::Technical,
        subcategory: Some(subcategory),
        weight,
        correct_answer: Some(correct_answer),
    }
}

fn standard_sections() -> Vec<Section> {
    vec![
        Section {
            id: "introduction",
            title: "Welcome to the Assessment",
            description: "Learn about smart contract development and what this assessment covers.",
            questions: Vec::new(),
            estimated_minutes: 2,
        },
        Section {
            id: PSYCHOMETRIC_SECTION,
            title: "Personality & Interest Assessment",
            description: "Evaluate your personality traits, interests, and motivation for smart contract development.",
            questions: psychometric_questions(),
            estimated_minutes: 8,
        },
        Section {
            id: TECHNICAL_SECTION,
            title: "Technical & Aptitude Assessment",
            description: "Test your technical knowledge and programming aptitude.",
            questions: technical_questions(),
            estimated_minutes: 10,
        },
        Section {
            id: DIMENSION_SECTION,
            title: "WISCAR Framework Analysis",
            description: "Multi-dimensional assessment of your readiness and learning profile.",
            questions: dimension_questions(),
            estimated_minutes: 7,
        },
        Section {
            id: "results",
            title: "Your Results & Recommendations",
            description: "Personalized insights, career guidance, and next steps.",
            questions: Vec::new(),
            estimated_minutes: 5,
        },
    ]
}

fn psychometric_questions() -> Vec<Question> {
    vec![
        likert(
            "psych_1",
            "I enjoy solving complex logical puzzles and mathematical problems.",
            Category::Personality,
            "analytical_thinking",
            1.0,
        ),
        likert(
            "psych_2",
            "I am curious about how blockchain technology works behind the scenes.",
            Category::Interest,
            "blockchain_curiosity",
            1.2,
        ),
        likert(
            "psych_3",
            "I prefer working on projects where I can see immediate results.",
            Category::Personality,
            "feedback_preference",
            0.8,
        ),
        likert(
            "psych_4",
            "I am comfortable working with abstract concepts and theoretical frameworks.",
            Category::Cognitive,
            "abstraction",
            1.1,
        ),
        likert(
            "psych_5",
            "When learning something new, I prefer to understand the underlying principles first.",
            Category::Cognitive,
            "learning_style",
            1.0,
        ),
        likert(
            "psych_6",
            "I am motivated by the potential to build decentralized applications that can impact finance and society.",
            Category::Motivation,
            "purpose_driven",
            1.3,
        ),
        likert(
            "psych_7",
            "I enjoy debugging code and finding solutions to technical problems.",
            Category::Interest,
            "problem_solving",
            1.1,
        ),
        likert(
            "psych_8",
            "I am comfortable with the idea that blockchain technology is still evolving and changing rapidly.",
            Category::Personality,
            "ambiguity_tolerance",
            1.0,
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    vec![
        knowledge_check(
            "tech_1",
            "What is a smart contract?",
            vec![
                "A legal document stored on the blockchain",
                "Self-executing code that runs on a blockchain network",
                "A type of cryptocurrency",
                "A blockchain wallet",
            ],
            1,
            "basic_concepts",
            1.0,
        ),
        knowledge_check(
            "tech_2",
            "Which programming language is most commonly used for Ethereum smart contracts?",
            vec!["JavaScript", "Python", "Solidity", "Rust"],
            2,
            "languages",
            1.0,
        ),
        knowledge_check(
            "tech_3",
            "If a function costs 21,000 gas and gas price is 20 gwei, what is the transaction cost in ETH? (1 ETH = 10^9 gwei)",
            vec!["0.00042 ETH", "0.0042 ETH", "0.042 ETH", "0.42 ETH"],
            0,
            "gas_calculations",
            1.2,
        ),
        scale(
            "tech_4",
            "How comfortable are you with object-oriented programming concepts?",
            Category::Aptitude,
            "programming_experience",
            1.1,
        ),
        knowledge_check(
            "tech_5",
            "What does \"immutable\" mean in the context of blockchain?",
            vec![
                "Data can be easily changed by administrators",
                "Data cannot be altered once written to the blockchain",
                "Data is encrypted",
                "Data is stored permanently",
            ],
            1,
            "blockchain_properties",
            1.0,
        ),
        scale(
            "tech_6",
            "How would you rate your understanding of data structures (arrays, objects, mappings)?",
            Category::Aptitude,
            "data_structures",
            1.0,
        ),
    ]
}

fn dimension_questions() -> Vec<Question> {
    vec![
        likert(
            "wiscar_1",
            "I am willing to spend 6-12 months learning smart contract development before seeing significant career benefits.",
            Category::WiscarFramework,
            "will",
            1.0,
        ),
        likert(
            "wiscar_2",
            "I find the concept of decentralized finance (DeFi) fascinating and want to build applications in this space.",
            Category::WiscarFramework,
            "interest",
            1.0,
        ),
        scale(
            "wiscar_3",
            "How would you rate your current programming skills overall?",
            Category::WiscarFramework,
            "skill",
            1.0,
        ),
        likert(
            "wiscar_4",
            "I can break down complex problems into smaller, manageable components.",
            Category::WiscarFramework,
            "cognitive",
            1.0,
        ),
        likert(
            "wiscar_5",
            "I actively seek feedback and use it to improve my work.",
            Category::WiscarFramework,
            "ability",
            1.0,
        ),
        likert(
            "wiscar_6",
            "I would enjoy working on projects that involve financial transactions and security considerations.",
            Category::WiscarFramework,
            "real_world",
            1.0,
        ),
    ]
}
