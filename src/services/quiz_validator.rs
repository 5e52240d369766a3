use serde_json::{Map, Value};

use crate::{
    models::domain::{quiz_question::OPTION_COUNT, Quiz, QuizQuestion},
    services::fallback_generator::{fallback_quiz, GENERAL_SUBJECT},
};

const REQUIRED_FIELDS: [&str; 3] = ["question", "options", "correctAnswer"];

/// Keeps the well-formed questions of a parsed draft. Malformed records are
/// dropped without report. A draft of the wrong shape, or one with no valid
/// question left, yields a fallback quiz of `expected_count` questions.
pub fn validate(draft: &Value, expected_count: usize) -> Quiz {
    let Some(object) = draft.as_object() else {
        log::error!("Quiz data is not an object");
        return fallback_quiz(GENERAL_SUBJECT, expected_count);
    };

    let empty = Vec::new();
    let questions = match object.get("questions") {
        None => &empty,
        Some(Value::Array(questions)) => questions,
        Some(_) => {
            log::error!("Questions are not a list");
            return fallback_quiz(GENERAL_SUBJECT, expected_count);
        }
    };

    let valid: Vec<QuizQuestion> = questions.iter().filter_map(validate_question).collect();

    if valid.is_empty() {
        log::warn!("No valid questions found after validation");
        return fallback_quiz(GENERAL_SUBJECT, expected_count);
    }

    log::debug!(
        "Dropped {} of {} questions",
        questions.len() - valid.len(),
        questions.len()
    );
    log::info!("Validated {} questions", valid.len());

    Quiz::new(valid)
}

fn validate_question(value: &Value) -> Option<QuizQuestion> {
    let record = value.as_object()?;
    if !REQUIRED_FIELDS.iter().all(|field| record.contains_key(*field)) {
        return None;
    }

    let record = coerce_record(record);

    match record.get("options") {
        Some(Value::Array(options)) if options.len() == OPTION_COUNT => {}
        _ => return None,
    }

    serde_json::from_value(Value::Object(record)).ok()
}

/// Replaces a digit-only string `correctAnswer` with its integer value and
/// turns number or bool options into their text.
fn coerce_record(record: &Map<String, Value>) -> Map<String, Value> {
    let mut record = record.clone();

    if let Some(Value::Array(options)) = record.get_mut("options") {
        for option in options.iter_mut() {
            let text = match option {
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            *option = Value::String(text);
        }
    }

    if let Some(Value::String(answer)) = record.get("correctAnswer") {
        if !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(index) = answer.parse::<i64>() {
                record.insert("correctAnswer".to_string(), Value::from(index));
            }
        }
    }

    record
}
