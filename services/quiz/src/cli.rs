use crate::demo::{run_catalog, run_demo, run_score, DemoArgs, ScoreArgs};
use crate::interactive;
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use career_fit::telemetry;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "career-fit-quiz",
    about = "Take the smart contract developer career-fit assessment from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the assessment interactively (default command)
    Run,
    /// Score a JSON answer file without prompting
    Score(ScoreArgs),
    /// List every section and question in the catalog
    Catalog,
    /// Walk a scripted respondent through the whole assessment
    Demo(DemoArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "career-fit quiz starting");

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => interactive::run(&config.assessment).await,
        Command::Score(args) => run_score(args, &config.assessment),
        Command::Catalog => run_catalog(),
        Command::Demo(args) => run_demo(args, &config.assessment),
    }
}
