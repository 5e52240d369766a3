pub mod fallback_generator;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_generation_service;
pub mod quiz_validator;
pub mod response_repairer;
pub mod text_extractor;

pub use model_service::{ModelClient, OllamaModelService};
pub use quiz_generation_service::QuizGenerationService;
pub use response_repairer::{HeuristicRepairer, ResponseRepairer};
pub use text_extractor::{PdfTextExtractor, TextExtractor};
