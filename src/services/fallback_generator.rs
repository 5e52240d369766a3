use crate::models::domain::{Quiz, QuizQuestion};

pub const GENERAL_SUBJECT: &str = "general";

/// Template quiz used whenever model output cannot be trusted. Every record
/// has the same shape and `correctAnswer` 0.
pub fn fallback_quiz(subject: &str, num_questions: usize) -> Quiz {
    log::info!("Creating fallback quiz for {}", subject);

    let questions = (0..num_questions)
        .map(|_| {
            QuizQuestion::new(
                format!("What is an important concept in {}?", subject),
                [
                    format!("Key concept in {} (Correct)", subject),
                    format!("Secondary aspect of {}", subject),
                    format!("Unrelated topic to {}", subject),
                    format!("Incorrect information about {}", subject),
                ],
                0,
            )
        })
        .collect();

    Quiz::new(questions)
}
