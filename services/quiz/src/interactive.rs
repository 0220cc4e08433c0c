use crate::demo::render_result;
use crate::infra::build_session;
use career_fit::assessment::{
    AnswerValue, AssessmentSession, Question, QuestionKind, SessionError, SessionStep,
};
use career_fit::config::AssessmentConfig;
use career_fit::error::AppError;
use chrono::{Duration, Utc};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

pub(crate) async fn run(config: &AssessmentConfig) -> Result<(), AppError> {
    let session = build_session(config, Utc::now())?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    drive(session, stdin, &mut stdout, config.timer_refresh).await
}

#[derive(Debug, PartialEq)]
enum Input {
    Answer(AnswerValue),
    Keep,
    Back,
    Quit,
}

enum Flow {
    Continue,
    Finished,
    Quit,
}

/// Runs one attempt against a line-oriented terminal. The timer tick only
/// prints the advisory time remaining.
pub(crate) async fn drive<R, W>(
    mut session: AssessmentSession,
    input: R,
    out: &mut W,
    refresh: std::time::Duration,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    write_introduction(&session, out)?;
    match lines.next_line().await? {
        Some(line) if !line.trim().eq_ignore_ascii_case("q") => {}
        _ => {
            writeln!(out, "\nMaybe next time.")?;
            return Ok(());
        }
    }

    session.start(Utc::now())?;
    info!("attempt started");
    let mut ticker = tokio::time::interval(refresh);
    ticker.tick().await;
    write_question(&session, out)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    writeln!(out, "\nInput closed; attempt abandoned.")?;
                    info!(answered = session.responses().len(), "attempt abandoned");
                    return Ok(());
                };
                match handle_line(&mut session, &line, out)? {
                    Flow::Continue => write_question(&session, out)?,
                    Flow::Finished => {
                        if let Some(result) = session.result() {
                            writeln!(out, "\n{}", render_result(result))?;
                        }
                        return Ok(());
                    }
                    Flow::Quit => {
                        writeln!(out, "\nAttempt abandoned.")?;
                        info!(answered = session.responses().len(), "attempt abandoned");
                        return Ok(());
                    }
                }
            }
            _ = ticker.tick() => {
                let remaining = session.time_remaining(Utc::now());
                writeln!(out, "\n[{} remaining, advisory]", format_remaining(remaining))?;
                write!(out, "> ")?;
                out.flush()?;
            }
        }
    }
}

fn handle_line<W: Write>(
    session: &mut AssessmentSession,
    raw: &str,
    out: &mut W,
) -> Result<Flow, AppError> {
    let parsed = match session.current_question() {
        Some(question) => parse_input(question, raw),
        None => return Ok(Flow::Finished),
    };
    let input = match parsed {
        Ok(input) => input,
        Err(message) => {
            writeln!(out, "{message}")?;
            return Ok(Flow::Continue);
        }
    };

    match input {
        Input::Quit => return Ok(Flow::Quit),
        Input::Back => {
            match session.previous() {
                Ok(()) => {}
                Err(SessionError::AtStart) => writeln!(out, "Already at the first question.")?,
                Err(err) => return Err(err.into()),
            }
            return Ok(Flow::Continue);
        }
        Input::Keep if session.current_response().is_none() => {
            writeln!(out, "Enter an answer, b to go back or q to quit.")?;
            return Ok(Flow::Continue);
        }
        Input::Keep => {}
        Input::Answer(value) => match session.answer(value) {
            Ok(()) => {}
            Err(err @ SessionError::InvalidAnswer { .. }) => {
                writeln!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err.into()),
        },
    }

    match session.next()? {
        SessionStep::NextQuestion => Ok(Flow::Continue),
        SessionStep::SectionCompleted(score) => {
            writeln!(
                out,
                "\nSection complete: {} scored {}",
                score.section_id, score.score
            )?;
            Ok(Flow::Continue)
        }
        SessionStep::Finished => Ok(Flow::Finished),
    }
}

/// Options are numbered from 1 on screen and stored 0-based.
fn parse_input(question: &Question, raw: &str) -> Result<Input, String> {
    let raw = raw.trim();
    let lowered = raw.to_ascii_lowercase();
    match lowered.as_str() {
        "" => return Ok(Input::Keep),
        "b" | "back" => return Ok(Input::Back),
        "q" | "quit" => return Ok(Input::Quit),
        _ => {}
    }

    match question.kind {
        QuestionKind::Boolean => match lowered.as_str() {
            "y" | "yes" | "1" => Ok(Input::Answer(true.into())),
            "n" | "no" | "0" => Ok(Input::Answer(false.into())),
            _ => Err("Answer y or n.".to_string()),
        },
        QuestionKind::Likert | QuestionKind::MultipleChoice => {
            let options = question.options.len();
            let hint = || format!("Enter an option number from 1 to {options}.");
            let choice: usize = raw.parse().map_err(|_| hint())?;
            if choice == 0 || choice > options {
                return Err(hint());
            }
            Ok(Input::Answer(AnswerValue::from((choice - 1) as u32)))
        }
        QuestionKind::Scale => raw
            .parse::<u32>()
            .map(|rating| Input::Answer(rating.into()))
            .map_err(|_| "Enter a rating from 1 to 10.".to_string()),
    }
}

fn write_introduction<W: Write>(session: &AssessmentSession, out: &mut W) -> io::Result<()> {
    if let Some(section) = session.current_section() {
        writeln!(out, "{}\n{}", section.title, section.description)?;
    }
    writeln!(
        out,
        "\nThe assessment takes about {} minutes. Options are numbered from 1; \
         b goes back, q quits.",
        session.catalog().total_estimated_minutes()
    )?;
    write!(out, "Press Enter to begin. ")?;
    out.flush()
}

fn write_question<W: Write>(session: &AssessmentSession, out: &mut W) -> io::Result<()> {
    let (Some(section), Some(question)) = (session.current_section(), session.current_question())
    else {
        return Ok(());
    };
    let position = session.position();

    if position.question_index == 0 {
        writeln!(out, "\n== {} ==\n{}", section.title, section.description)?;
    }
    writeln!(
        out,
        "\n{} ({}/{})",
        question.prompt,
        position.question_index + 1,
        section.questions.len()
    )?;
    match question.kind {
        QuestionKind::Likert | QuestionKind::MultipleChoice => {
            for (index, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}. {}", index + 1, option)?;
            }
        }
        QuestionKind::Scale => writeln!(out, "  Rate from 1 (lowest) to 10 (highest)")?,
        QuestionKind::Boolean => writeln!(out, "  y / n")?,
    }

    if let Some(raw) = session.current_response().and_then(AnswerValue::as_number) {
        let shown = match question.kind {
            QuestionKind::Likert | QuestionKind::MultipleChoice => raw + 1.0,
            QuestionKind::Scale | QuestionKind::Boolean => raw,
        };
        writeln!(out, "  Current answer: {shown} (Enter keeps it)")?;
    }
    write!(out, "> ")?;
    out.flush()
}

fn format_remaining(remaining: Duration) -> String {
    let seconds = remaining.num_seconds().max(0);
    format!("{}m {:02}s", seconds / 60, seconds % 60)
}
