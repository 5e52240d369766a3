use std::sync::Arc;

use crate::{
    config::Config,
    services::{HeuristicRepairer, OllamaModelService, PdfTextExtractor, QuizGenerationService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_generation_service: Arc<QuizGenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let extractor = Arc::new(PdfTextExtractor::new());
        let model = Arc::new(OllamaModelService::new(&config));
        let repairer = Arc::new(HeuristicRepairer::new());

        let quiz_generation_service = Arc::new(QuizGenerationService::new(
            extractor,
            model,
            repairer,
            config.clone(),
        ));

        Self {
            quiz_generation_service,
            config: Arc::new(config),
        }
    }
}
