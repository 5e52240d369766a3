use std::process::ExitCode;

use env_logger::{Env, Target};
use textbook_quiz::{
    app_state::AppState,
    config::Config,
    errors::AppError,
    models::{domain::Quiz, dto::request::QuizRequest},
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    log::info!("Quiz generation service started");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(quiz) => match serde_json::to_string(&quiz) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Could not serialize quiz: {}", e);
                println!(r#"{{"error": "Could not serialize quiz"}}"#);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            log::error!("{} ({})", err, err.error_code());
            println!("{}", error_json(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<Quiz, AppError> {
    let request = QuizRequest::from_args(args)?;
    let state = AppState::new(Config::from_env());

    state.quiz_generation_service.generate_quiz(&request).await
}

fn error_json(err: &AppError) -> String {
    serde_json::to_string(&err.to_response())
        .unwrap_or_else(|_| r#"{"error": "Could not serialize error"}"#.to_string())
}
