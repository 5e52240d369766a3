use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when the model output holds nothing that looks like an object.
pub const EMPTY_QUIZ_JSON: &str = r#"{"questions": []}"#;

static BARE_KEY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[{,]|\s)(\s*)([A-Za-z_][A-Za-z0-9_]*)(\s*):")
        .expect("BARE_KEY_REGEX is a valid regex pattern")
});

static TRAILING_COMMA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",\s*([}\]])").expect("TRAILING_COMMA_REGEX is a valid regex pattern")
});

static QUOTED_ANSWER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""correctAnswer"\s*:\s*"([0-9]+)""#)
        .expect("QUOTED_ANSWER_REGEX is a valid regex pattern")
});

/// Turns loosely formatted model output into text that should parse as JSON.
/// The result is best effort; callers must still handle a parse failure.
pub trait ResponseRepairer: Send + Sync {
    fn repair(&self, raw: &str) -> String;
}

/// String-level repair of the usual model mistakes: surrounding prose,
/// single quotes, bare keys, trailing commas and quoted answer indexes.
/// Any literal apostrophe in the content becomes a double quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRepairer;

impl HeuristicRepairer {
    pub fn new() -> Self {
        Self
    }
}

impl ResponseRepairer for HeuristicRepairer {
    fn repair(&self, raw: &str) -> String {
        let span = match (raw.find('{'), raw.rfind('}')) {
            (Some(start), Some(end)) if end > start => &raw[start..=end],
            _ => {
                log::warn!("No JSON object found in model response");
                return EMPTY_QUIZ_JSON.to_string();
            }
        };

        let text = span.replace('\'', "\"");
        let text = BARE_KEY_REGEX.replace_all(&text, "$1$2\"$3\"$4:");
        let text = TRAILING_COMMA_REGEX.replace_all(&text, "$1");
        let text = QUOTED_ANSWER_REGEX.replace_all(&text, "\"correctAnswer\": $1");

        log::debug!(
            "Repaired JSON preview: {}...",
            text.chars().take(150).collect::<String>()
        );

        text.into_owned()
    }
}
