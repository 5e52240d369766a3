use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub const MAX_QUESTIONS: i64 = 100;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub pdf_path: String,

    #[validate(range(min = 1, max = MAX_QUESTIONS, message = "must be between 1 and 100"))]
    pub num_questions: i64,
}

impl QuizRequest {
    pub fn new(subject: impl Into<String>, pdf_path: impl Into<String>, num_questions: i64) -> Self {
        Self {
            subject: subject.into(),
            pdf_path: pdf_path.into(),
            num_questions,
        }
    }

    /// Builds a request from the positional arguments `<subject> <pdf_path> <num_questions>`
    /// (program name already stripped).
    pub fn from_args(args: &[String]) -> AppResult<Self> {
        let [subject, pdf_path, count] = args else {
            return Err(AppError::Usage);
        };

        let num_questions = count.trim().parse::<i64>().map_err(|_| {
            AppError::ValidationError(format!("num_questions must be an integer, got '{}'", count))
        })?;

        Ok(Self::new(subject.as_str(), pdf_path.as_str(), num_questions))
    }

    /// Question count as a size. Only meaningful once `validate` has passed.
    pub fn question_count(&self) -> usize {
        self.num_questions.clamp(0, MAX_QUESTIONS) as usize
    }
}

/// Body of a POST to the generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerationOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub num_predict: u32,
}

impl GenerateRequest {
    pub fn new(config: &Config, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model_name.clone(),
            prompt: prompt.into(),
            stream: false,
            options: GenerationOptions {
                temperature: config.temperature,
                top_p: config.top_p,
                num_predict: config.num_predict,
            },
        }
    }
}
