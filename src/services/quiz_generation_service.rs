use std::path::Path;
use std::sync::Arc;

use validator::Validate;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::request::QuizRequest},
    services::{
        fallback_generator::fallback_quiz,
        model_service::ModelClient,
        prompt_builder::build_prompt,
        quiz_validator,
        response_repairer::ResponseRepairer,
        text_extractor::TextExtractor,
    },
};

/// Extract → prompt → model → repair → parse → validate.
///
/// Extraction problems are returned as errors. Everything after a successful
/// extraction degrades to a fallback quiz instead of failing.
pub struct QuizGenerationService {
    extractor: Arc<dyn TextExtractor>,
    model: Arc<dyn ModelClient>,
    repairer: Arc<dyn ResponseRepairer>,
    config: Config,
}

impl QuizGenerationService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        model: Arc<dyn ModelClient>,
        repairer: Arc<dyn ResponseRepairer>,
        config: Config,
    ) -> Self {
        Self {
            extractor,
            model,
            repairer,
            config,
        }
    }

    pub async fn generate_quiz(&self, request: &QuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let path = Path::new(&request.pdf_path);
        if !path.exists() {
            return Err(AppError::FileNotFound(request.pdf_path.clone()));
        }

        let text = self.extractor.extract(path, self.config.max_extract_chars)?;
        if text.as_str().trim().chars().count() < self.config.min_text_chars {
            log::error!(
                "Extracted text too short: {} characters",
                text.as_str().trim().chars().count()
            );
            return Err(AppError::InsufficientText);
        }

        Ok(self
            .generate_from_text(&request.subject, text.as_str(), request.question_count())
            .await)
    }

    /// Never fails: any model, repair or parse problem yields a fallback quiz.
    pub async fn generate_from_text(&self, subject: &str, text: &str, num_questions: usize) -> Quiz {
        log::info!("Generating {} questions for {}", num_questions, subject);

        let prompt = build_prompt(subject, text, num_questions, self.config.prompt_text_chars);

        let raw = match self.model.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Error in quiz generation: {}", e);
                return fallback_quiz(subject, num_questions);
            }
        };

        let repaired = self.repairer.repair(&raw);
        match serde_json::from_str(&repaired) {
            Ok(draft) => quiz_validator::validate(&draft, num_questions),
            Err(e) => {
                log::error!("JSON parsing failed: {}", e);
                fallback_quiz(subject, num_questions)
            }
        }
    }
}
