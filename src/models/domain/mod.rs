pub mod extracted_text;
pub mod quiz;
pub mod quiz_question;
pub use extracted_text::ExtractedText;
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
