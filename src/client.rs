use std::error::Error as _;
use std::io;

use tracing::debug;
use ureq::{Agent, AgentBuilder};

use crate::config::Config;
use crate::error::GenerationError;
use crate::models::{
    GenerationRequest, GenerationResponse, InferenceEnvelope, InferenceParameters, InferenceRequest,
};

/// The single external collaborator: prompt text in, generated text out
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, GenerationError>;
}

/// A blocking client for a hosted text-generation inference endpoint
pub struct InferenceClient {
    agent: Agent,
    api_url: String,
    api_token: String,
    temperature: f32,
}

impl InferenceClient {
    /// Create a new client; every request is bounded by `config.timeout`
    pub fn new(config: &Config) -> Self {
        let agent = AgentBuilder::new().timeout(config.timeout).build();

        InferenceClient {
            agent,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            temperature: config.temperature,
        }
    }
}

impl TextGenerator for InferenceClient {
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        if self.api_token.trim().is_empty() {
            return Err(GenerationError::MissingCredential);
        }

        let body = InferenceRequest {
            inputs: &request.prompt,
            parameters: InferenceParameters {
                max_new_tokens: request.max_new_tokens,
                temperature: self.temperature,
                return_full_text: false,
            },
        };

        debug!(
            url = %self.api_url,
            prompt_chars = request.prompt.len(),
            max_new_tokens = request.max_new_tokens,
            "Sending generation request"
        );

        let response = self
            .agent
            .post(&self.api_url)
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .send_json(&body)
            .map_err(map_ureq_error)?;

        let response_text = response.into_string().map_err(map_io_error)?;

        let envelope: InferenceEnvelope = serde_json::from_str(&response_text).map_err(|e| {
            GenerationError::InvalidResponse(format!("Failed to parse JSON response: {e}"))
        })?;

        let text = envelope.into_text().map_err(GenerationError::InvalidResponse)?;

        debug!(response_chars = text.len(), "Received generation response");

        Ok(GenerationResponse { text })
    }
}

fn map_ureq_error(err: ureq::Error) -> GenerationError {
    match err {
        ureq::Error::Status(status, response) => GenerationError::Api {
            status,
            message: response.into_string().unwrap_or_default(),
        },
        ureq::Error::Transport(transport) => {
            let timed_out = transport
                .source()
                .and_then(|source| source.downcast_ref::<io::Error>())
                .is_some_and(is_timeout);

            if timed_out {
                GenerationError::Timeout
            } else {
                GenerationError::Connection(transport.to_string())
            }
        }
    }
}

fn map_io_error(err: io::Error) -> GenerationError {
    if is_timeout(&err) {
        GenerationError::Timeout
    } else {
        GenerationError::Connection(err.to_string())
    }
}

fn is_timeout(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}
