/// Text pulled from a PDF, page by page, up to a character budget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedText {
    content: String,
    pages_read: usize,
    truncated: bool,
}

impl ExtractedText {
    pub fn new(content: String, pages_read: usize, truncated: bool) -> Self {
        Self {
            content,
            pages_read,
            truncated,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn pages_read(&self) -> usize {
        self.pages_read
    }

    /// True when the budget stopped extraction before the last page.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}
