use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub ollama_url: String,
    pub model_name: String,
    pub model_timeout_secs: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub num_predict: u32,
    /// Extraction stops after the page that reaches this many characters.
    pub max_extract_chars: usize,
    /// Prefix of the extracted text embedded in the prompt.
    pub prompt_text_chars: usize,
    /// Trimmed extracted text shorter than this is unusable.
    pub min_text_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_url: "http://localhost:11434/api/generate".to_string(),
            model_name: "gemma:2b".to_string(),
            model_timeout_secs: 120,
            temperature: 0.3,
            top_p: 0.9,
            num_predict: 700,
            max_extract_chars: 9000,
            prompt_text_chars: 8000,
            min_text_chars: 50,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            ollama_url: env::var("OLLAMA_URL").unwrap_or(default.ollama_url),
            model_name: env::var("MODEL_NAME").unwrap_or(default.model_name),
            model_timeout_secs: parse_env("MODEL_TIMEOUT_SECS").unwrap_or(default.model_timeout_secs),
            temperature: parse_env("MODEL_TEMPERATURE").unwrap_or(default.temperature),
            top_p: parse_env("MODEL_TOP_P").unwrap_or(default.top_p),
            num_predict: parse_env("MODEL_NUM_PREDICT").unwrap_or(default.num_predict),
            max_extract_chars: parse_env("MAX_EXTRACT_CHARS").unwrap_or(default.max_extract_chars),
            prompt_text_chars: parse_env("PROMPT_TEXT_CHARS").unwrap_or(default.prompt_text_chars),
            min_text_chars: parse_env("MIN_TEXT_CHARS").unwrap_or(default.min_text_chars),
        }
    }

    pub fn test_config() -> Self {
        Self {
            ollama_url: "http://127.0.0.1:9/api/generate".to_string(),
            model_name: "test-model".to_string(),
            model_timeout_secs: 2,
            ..Self::default()
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
