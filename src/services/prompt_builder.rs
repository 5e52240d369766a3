use crate::constants::quiz_prompt::{QUIZ_AUDIENCE, QUIZ_SCHEMA_EXAMPLE, TEXT_HEADING};

/// Renders the generation prompt. Only the first `text_chars` characters of
/// `text` are embedded. Subject and count are passed through as given.
pub fn build_prompt(subject: &str, text: &str, num_questions: usize, text_chars: usize) -> String {
    let content = truncate_chars(text, text_chars);

    format!(
        "
Create {num_questions} multiple-choice questions for {subject} for {QUIZ_AUDIENCE}.
Use the text below as reference.

{TEXT_HEADING}
{content}

Return ONLY valid JSON with DOUBLE QUOTES and exactly {num_questions} questions, like:
{QUIZ_SCHEMA_EXAMPLE}
"
    )
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
