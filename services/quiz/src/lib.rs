mod cli;
mod demo;
mod infra;
mod interactive;

use career_fit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
