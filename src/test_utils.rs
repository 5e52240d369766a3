#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// A file that always exists, for tests that stub out extraction.
    pub fn existing_path() -> String {
        concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml").to_string()
    }

    /// Textbook text comfortably above the minimum length.
    pub fn photosynthesis_text() -> &'static str {
        "Photosynthesis converts light energy into chemical energy. \
         Plants capture sunlight with chlorophyll and store energy in glucose."
    }

    /// One valid question record as the model is asked to return it.
    pub fn single_question_response() -> &'static str {
        r#"{"questions":[{"question":"What is photosynthesis?","options":["A","B","C","D"],"correctAnswer":0}]}"#
    }

    pub fn question_json(question: &str, correct_answer: Value) -> Value {
        json!({
            "question": question,
            "options": ["A", "B", "C", "D"],
            "correctAnswer": correct_answer
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_existing_path() {
        assert!(std::path::Path::new(&existing_path()).exists());
    }

    #[test]
    fn test_fixtures_photosynthesis_text_is_long_enough() {
        assert!(photosynthesis_text().trim().chars().count() >= 50);
    }

    #[test]
    fn test_fixtures_single_question_response_parses() {
        let value: serde_json::Value =
            serde_json::from_str(single_question_response()).expect("fixture should parse");
        assert_eq!(value["questions"].as_array().map(Vec::len), Some(1));
    }
}
