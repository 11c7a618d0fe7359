//! LlamaServerGenerator -- concrete [`TextGenerator`] for a llama.cpp server.
//!
//! Sends non-streaming requests to the `/completion` endpoint of a local
//! llama.cpp-style server. The server owns model loading, tokenization,
//! and sampling; this adapter only ships the rendered prompt and the
//! sampling knobs across HTTP and maps failures to [`EngineError`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use confab_core::engine::generator::TextGenerator;
use confab_types::engine::GenerationRequest;
use confab_types::error::EngineError;

/// Request body for the llama.cpp `/completion` endpoint.
#[derive(Debug, Clone, Serialize)]
struct CompletionBody<'a> {
    prompt: &'a str,
    n_predict: u32,
    temperature: f64,
    top_k: u32,
    top_p: f64,
    stop: &'a [String],
    stream: bool,
}

/// Response body from the `/completion` endpoint.
///
/// The server returns more fields (timings, token counts); only the
/// generated text matters here.
#[derive(Debug, Clone, Deserialize)]
struct CompletionReply {
    content: String,
}

/// HTTP client for a llama.cpp completion server.
pub struct LlamaServerGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl LlamaServerGenerator {
    /// Create a generator pointed at the given server base URL.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // local models can be slow
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for a server path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn to_body<'a>(request: &'a GenerationRequest) -> CompletionBody<'a> {
        CompletionBody {
            prompt: &request.prompt,
            n_predict: request.sampling.max_new_tokens,
            temperature: request.sampling.temperature,
            top_k: request.sampling.top_k,
            top_p: request.sampling.top_p,
            stop: &request.stop,
            stream: false,
        }
    }
}

impl TextGenerator for LlamaServerGenerator {
    fn name(&self) -> &str {
        "llama-server"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, EngineError> {
        let body = Self::to_body(request);
        let url = self.url("/completion");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(EngineError::Engine {
                message: format!("HTTP {status}: {error_body}"),
            });
        }

        let reply: CompletionReply = response
            .json()
            .await
            .map_err(|e| EngineError::Deserialization(format!("failed to parse response: {e}")))?;

        Ok(reply.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_types::config::SamplingParams;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let generator = LlamaServerGenerator::new("http://127.0.0.1:8080/");
        assert_eq!(generator.url("/completion"), "http://127.0.0.1:8080/completion");
    }

    #[test]
    fn test_completion_body_shape() {
        let request = GenerationRequest::new(
            "<|user|>\nhi</s>\n<|assistant|>\n".to_string(),
            SamplingParams::default(),
            vec!["</s>".to_string()],
        );
        let body = LlamaServerGenerator::to_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["prompt"], "<|user|>\nhi</s>\n<|assistant|>\n");
        assert_eq!(json["n_predict"], 60);
        assert_eq!(json["top_k"], 50);
        assert_eq!(json["stream"], false);
        assert_eq!(json["stop"][0], "</s>");
    }

    #[test]
    fn test_completion_reply_parses_extra_fields() {
        // The server sends timings and token counts alongside the text.
        let json = r#"{"content":"hello","tokens_predicted":5,"stop":true}"#;
        let reply: CompletionReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.content, "hello");
    }
}
