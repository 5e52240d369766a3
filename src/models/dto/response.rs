use serde::Deserialize;

/// Reply from the generation endpoint. Only `response` is read; a reply
/// without it counts as an empty answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}
