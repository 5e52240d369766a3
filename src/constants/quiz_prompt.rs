pub const QUIZ_AUDIENCE: &str = "school students";

pub const TEXT_HEADING: &str = "TEXTBOOK CONTENT:";

/// One-question example of the only output shape the model may return.
pub const QUIZ_SCHEMA_EXAMPLE: &str = r#"{
  "questions": [
    {
      "question": "What is 2 + 2?",
      "options": ["3", "4", "5", "6"],
      "correctAnswer": 1
    }
  ]
}"#;
