use serde::Deserialize;

/// Response body of `GET <base>/?lang=..&input=..`
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisResponse {
    pub audio: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Word timing returned alongside the audio URL
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub endtime: f64,
    pub orth: String,
}
