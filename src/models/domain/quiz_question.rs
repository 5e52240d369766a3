use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;

/// One multiple-choice item. `correct_answer` indexes into `options`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    #[serde(rename = "correctAnswer")]
    pub correct_answer: i64,
}

impl QuizQuestion {
    pub fn new(question: impl Into<String>, options: [String; OPTION_COUNT], correct_answer: i64) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quiz_question_uses_camel_case_answer_key() {
        let question = QuizQuestion::new(
            "What is 2 + 2?",
            ["3".into(), "4".into(), "5".into(), "6".into()],
            1,
        );

        let value = serde_json::to_value(&question).expect("question should serialize");
        assert_eq!(
            value,
            json!({
                "question": "What is 2 + 2?",
                "options": ["3", "4", "5", "6"],
                "correctAnswer": 1
            })
        );
    }

    #[test]
    fn quiz_question_rejects_wrong_option_count() {
        let three = json!({
            "question": "Q",
            "options": ["a", "b", "c"],
            "correctAnswer": 0
        });
        let five = json!({
            "question": "Q",
            "options": ["a", "b", "c", "d", "e"],
            "correctAnswer": 0
        });

        assert!(serde_json::from_value::<QuizQuestion>(three).is_err());
        assert!(serde_json::from_value::<QuizQuestion>(five).is_err());
    }

    #[test]
    fn quiz_question_rejects_string_answer() {
        let value = json!({
            "question": "Q",
            "options": ["a", "b", "c", "d"],
            "correctAnswer": "B"
        });

        assert!(serde_json::from_value::<QuizQuestion>(value).is_err());
    }

    #[test]
    fn quiz_question_ignores_extra_fields() {
        let value = json!({
            "question": "Q",
            "options": ["a", "b", "c", "d"],
            "correctAnswer": 2,
            "explanation": "because"
        });

        let question: QuizQuestion =
            serde_json::from_value(value).expect("extra fields are tolerated");
        assert_eq!(question.correct_answer, 2);
    }
}
