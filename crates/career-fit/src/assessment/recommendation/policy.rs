use super::super::domain::{Recommendation, Suggestion, SuggestionTopic};
use super::config::RecommendationConfig;
use super::ScoreInputs;

/// Verdict plus the content attached to its branch.
pub(crate) struct Verdict {
    pub recommendation: Recommendation,
    pub feedback: &'static str,
    pub suggestions: Vec<Suggestion>,
    pub learning_path: &'static [&'static str],
    pub career_paths: &'static [&'static str],
}

const ADVANCED_LEARNING_PATH: &[&str] = &[
    "Complete Solidity fundamentals course",
    "Build your first smart contract project",
    "Learn Web3.js and frontend integration",
    "Study security best practices and auditing",
    "Contribute to open-source DeFi projects",
    "Build a portfolio of diverse blockchain applications",
];

const ADVANCED_CAREER_PATHS: &[&str] = &[
    "Smart Contract Engineer",
    "Web3 Full Stack Developer",
    "DeFi Protocol Developer",
    "Blockchain Security Auditor",
    "NFT Platform Developer",
];

const INTERMEDIATE_LEARNING_PATH: &[&str] = &[
    "Complete programming fundamentals if needed",
    "Take an introductory blockchain course",
    "Learn Solidity basics through interactive tutorials",
    "Build simple smart contract projects",
    "Join blockchain developer communities",
];

const INTERMEDIATE_CAREER_PATHS: &[&str] = &[
    "Blockchain Developer (after additional training)",
    "Web3 Frontend Developer",
    "Blockchain Product Manager",
    "Crypto/DeFi Analyst",
];

const ADJACENT_CAREER_PATHS: &[&str] = &[
    "Traditional Software Development",
    "Data Science & Analytics",
    "Cybersecurity",
    "Product Management",
    "Technical Writing",
    "UX/UI Design",
];

/// Ordered threshold rules; the first matching branch wins.
pub(crate) fn decide_verdict(inputs: &ScoreInputs, config: &RecommendationConfig) -> Verdict {
    let ScoreInputs {
        psychometric,
        technical,
        average,
        ..
    } = *inputs;

    if average >= config.yes_minimum_average
        && psychometric >= config.yes_minimum_psychometric
        && technical >= config.yes_minimum_technical
    {
        return Verdict {
            recommendation: Recommendation::Yes,
            feedback: "You show excellent potential for smart contract development! Your personality traits, interests, and technical aptitude align well with this career path.",
            suggestions: Vec::new(),
            learning_path: ADVANCED_LEARNING_PATH,
            career_paths: ADVANCED_CAREER_PATHS,
        };
    }

    if average >= config.maybe_minimum_average
        && (psychometric >= config.maybe_minimum_psychometric
            || technical >= config.maybe_minimum_technical)
    {
        let mut suggestions = Vec::new();
        if technical < config.technical_gap_below {
            suggestions.push(Suggestion::new(
                SuggestionTopic::ProgrammingFoundations,
                "Strengthen your programming fundamentals with JavaScript or Python",
            ));
            suggestions.push(Suggestion::new(
                SuggestionTopic::BlockchainConcepts,
                "Learn basic blockchain concepts and terminology",
            ));
        }
        if psychometric < config.psychometric_gap_below {
            suggestions.push(Suggestion::new(
                SuggestionTopic::BlockchainInterest,
                "Explore more blockchain use cases to build genuine interest",
            ));
            suggestions.push(Suggestion::new(
                SuggestionTopic::LogicalReasoning,
                "Practice logical reasoning and problem-solving exercises",
            ));
        }

        return Verdict {
            recommendation: Recommendation::Maybe,
            feedback: "You have promising potential for smart contract development with some areas to strengthen. Focus on the recommended improvements to increase your readiness.",
            suggestions,
            learning_path: INTERMEDIATE_LEARNING_PATH,
            career_paths: INTERMEDIATE_CAREER_PATHS,
        };
    }

    Verdict {
        recommendation: Recommendation::No,
        feedback: "Smart contract development might not be the best fit based on your current profile. Consider the alternative career paths that better match your strengths.",
        suggestions: vec![
            Suggestion::new(
                SuggestionTopic::AlternativeFields,
                "Consider related fields that match your interests better",
            ),
            Suggestion::new(
                SuggestionTopic::ProgrammingFoundations,
                "Build foundational programming skills if you're still interested in tech",
            ),
        ],
        learning_path: &[],
        career_paths: ADJACENT_CAREER_PATHS,
    }
}
