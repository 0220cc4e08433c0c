use crate::infra::{build_session, load_answers, score_responses};
use career_fit::assessment::{
    AssessmentResult, AssessmentSession, Question, QuestionCatalog, QuestionKind, SessionStep,
};
use career_fit::config::AssessmentConfig;
use career_fit::error::AppError;
use chrono::Utc;
use clap::{Args, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Scripted respondents for the demo walkthrough.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Profile {
    /// Agrees strongly, knows every answer, rates themself highly
    Strong,
    /// Agrees, knows the basics, rates themself in the middle
    #[default]
    Moderate,
    /// Disagrees throughout and misses every knowledge check
    Weak,
}

impl Profile {
    /// Answer given to `question`; `checks_seen` counts earlier knowledge checks.
    fn answer(self, question: &Question, checks_seen: usize) -> u32 {
        match question.kind {
            QuestionKind::Likert => match self {
                Profile::Strong => 4,
                Profile::Moderate => 3,
                Profile::Weak => 0,
            },
            QuestionKind::Scale => match self {
                Profile::Strong => 9,
                Profile::Moderate => 6,
                Profile::Weak => 1,
            },
            QuestionKind::Boolean => u32::from(self != Profile::Weak),
            QuestionKind::MultipleChoice => {
                let correct = question.correct_answer.unwrap_or(0);
                let knows = match self {
                    Profile::Strong => true,
                    Profile::Moderate => checks_seen < 2,
                    Profile::Weak => false,
                };
                let choice = if knows {
                    correct
                } else {
                    (correct + 1) % question.options.len().max(1)
                };
                choice as u32
            }
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Respondent profile to script
    #[arg(long, value_enum, default_value_t = Profile::Moderate)]
    pub(crate) profile: Profile,
    /// Print the result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON answer file, either {"responses": [...]} or a bare array
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AssessmentConfig) -> Result<(), AppError> {
    let mut session = build_session(config, Utc::now())?;
    let result = walk_profile(&mut session, args.profile)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Career-fit demo ({:?} respondent)", args.profile);
        for score in session.section_scores() {
            println!("  {:<14} {:>3}", score.section_id, score.score);
        }
        println!();
        print!("{}", render_result(&result));
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs, config: &AssessmentConfig) -> Result<(), AppError> {
    let responses = load_answers(&args.answers)?;
    let mut session = build_session(config, Utc::now())?;
    let result = score_responses(&mut session, responses)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result));
    }
    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    catalog.validate()?;
    print!("{}", render_catalog(&catalog));
    Ok(())
}

/// Answers every question as `profile` would, navigating section by section.
pub(crate) fn walk_profile(
    session: &mut AssessmentSession,
    profile: Profile,
) -> Result<AssessmentResult, AppError> {
    session.start(Utc::now())?;
    let mut checks_seen = 0;

    loop {
        let answer = match session.current_question() {
            Some(question) => {
                let answer = profile.answer(question, checks_seen);
                if question.kind == QuestionKind::MultipleChoice {
                    checks_seen += 1;
                }
                answer
            }
            None => break,
        };
        session.answer(answer)?;
        if session.next()? == SessionStep::Finished {
            break;
        }
    }

    match session.result() {
        Some(result) => Ok(result.clone()),
        None => Ok(session.finish()?.clone()),
    }
}

pub(crate) fn render_result(result: &AssessmentResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Recommendation: {} (confidence {}%)",
        result.recommendation.label(),
        result.confidence_score
    );
    let _ = writeln!(out, "{}", result.feedback);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<24}{:>3}", "Psychometric fit", result.psychometric_score);
    let _ = writeln!(out, "{:<24}{:>3}", "Technical readiness", result.technical_score);
    let _ = writeln!(out, "{:<24}{:>3}", "WISCAR overall", result.dimension_score.overall);
    for (dimension, score) in result.dimension_score.entries() {
        let _ = writeln!(out, "  {:<22}{:>3}", dimension.label(), score);
    }

    render_list(&mut out, "Suggestions", result.suggestions.iter().map(|s| s.text.as_str()));
    render_list(&mut out, "Learning path", result.learning_path.iter().map(String::as_str));
    render_list(&mut out, "Career paths", result.career_paths.iter().map(String::as_str));
    out
}

fn render_list<'a>(out: &mut String, heading: &str, items: impl Iterator<Item = &'a str>) {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return;
    }
    let _ = writeln!(out, "\n{heading}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

pub(crate) fn render_catalog(catalog: &QuestionCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} sections, about {} minutes",
        catalog.sections().len(),
        catalog.total_estimated_minutes()
    );
    for section in catalog.sections() {
        let _ = writeln!(
            out,
            "\n[{}] {} ({} min)",
            section.id, section.title, section.estimated_minutes
        );
        let _ = writeln!(out, "  {}", section.description);
        for question in &section.questions {
            let _ = writeln!(
                out,
                "  {:<9} {:<16} {}",
                question.id,
                question.kind.label(),
                question.prompt
            );
            for (index, option) in question.options.iter().enumerate() {
                let _ = writeln!(out, "            {}. {}", index + 1, option);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_fit::assessment::{Recommendation, SuggestionTopic};

    fn demo(profile: Profile) -> AssessmentResult {
        let mut session =
            build_session(&AssessmentConfig::default(), Utc::now()).expect("standard catalog");
        walk_profile(&mut session, profile).expect("demo completes")
    }

    #[test]
    fn strong_profile_is_recommended() {
        let result = demo(Profile::Strong);

        assert_eq!(result.psychometric_score, 100);
        assert_eq!(result.technical_score, 97);
        assert_eq!(result.dimension_score.overall, 98);
        assert_eq!(result.recommendation, Recommendation::Yes);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn moderate_profile_lands_in_the_middle() {
        let result = demo(Profile::Moderate);

        assert_eq!(result.psychometric_score, 75);
        assert_eq!(result.technical_score, 52);
        assert_eq!(result.dimension_score.overall, 73);
        assert_eq!(result.recommendation, Recommendation::Maybe);
        assert_eq!(result.confidence_score, 33);
        let topics: Vec<SuggestionTopic> =
            result.suggestions.iter().map(|s| s.topic).collect();
        assert_eq!(
            topics,
            vec![
                SuggestionTopic::ProgrammingFoundations,
                SuggestionTopic::BlockchainConcepts
            ]
        );
    }

    #[test]
    fn weak_profile_is_steered_elsewhere() {
        let result = demo(Profile::Weak);

        assert_eq!(result.psychometric_score, 0);
        assert_eq!(result.technical_score, 3);
        assert_eq!(result.dimension_score.overall, 2);
        assert_eq!(result.recommendation, Recommendation::No);
        assert_eq!(result.confidence_score, 97);
    }

    #[test]
    fn report_lists_verdict_and_advice() {
        let report = render_result(&demo(Profile::Moderate));

        assert!(report.starts_with("Recommendation: Consider with preparation (confidence 33%)"));
        assert!(report.contains("Technical readiness      52"));
        assert!(report.contains("Suggestions:"));
        assert!(report.contains("Learning path:"));
        assert!(report.contains("Career paths:"));
    }

    #[test]
    fn catalog_listing_numbers_options_from_one() {
        let listing = render_catalog(&QuestionCatalog::standard());

        assert!(listing.starts_with("5 sections, about 32 minutes"));
        assert!(listing.contains("[technical] Technical & Aptitude Assessment (10 min)"));
        assert!(listing.contains("2. Self-executing code that runs on a blockchain network"));
    }
}
