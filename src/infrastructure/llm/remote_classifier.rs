//! Chat-completion backed requirement classifier

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classification::{
    CATEGORY_VOCABULARY, ClassificationError, INTEGRATION_VOCABULARY, RequirementClassifier,
    RequirementSpec, parse_classification,
};
use crate::infrastructure::llm::{ApiKey, ClassifierConfig};

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that analyzes software requirements and returns structured JSON responses. Always return valid JSON only, no markdown or additional text.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Classifies descriptions through an OpenAI-compatible chat completion endpoint
pub struct RemoteClassifier {
    client: Client,
    api_key: ApiKey,
    config: ClassifierConfig,
}

impl RemoteClassifier {
    /// Create a classifier; fails when the configuration carries no API key
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassificationError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ClassificationError::MissingCredential)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ClassificationError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, ClassificationError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassificationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ClassificationError::EmptyResponse)
    }

    fn transport_error(&self, e: reqwest::Error) -> ClassificationError {
        if e.is_timeout() {
            ClassificationError::Timeout(self.config.timeout.as_secs())
        } else if e.is_decode() {
            ClassificationError::MalformedResponse(e.to_string())
        } else {
            ClassificationError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl RequirementClassifier for RemoteClassifier {
    async fn classify(&self, description: &str) -> Result<RequirementSpec, ClassificationError> {
        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "Requesting remote classification");

        let content = self.complete(&build_prompt(description)).await?;
        parse_classification(&content)
    }
}

/// Instructional prompt embedding the user's description
pub fn build_prompt(description: &str) -> String {
    let categories = quoted(CATEGORY_VOCABULARY);
    let integrations = quoted(INTEGRATION_VOCABULARY);

    format!(
        r#"Analyze this description of needed MCP tools and extract structured information.

Description: "{description}"

Please analyze and return a JSON object with:
1. toolCategories: Array of categories needed (choose from: {categories})
2. suggestedIntegrations: Array of integrations (choose from: {integrations})
3. customTools: Array of specific tools with {{name, description, category}}

Think about what the user needs based on their description. Look for:
- API mentions (GitHub, Slack, REST APIs) → "api" category + specific integrations
- File operations (read, write, manage files) → "file" category
- Notifications (send messages, alerts) → "notification" category
- Database operations → "database" category
- Authentication needs → "auth" category

Return only valid JSON, no other text:"#
    )
}

fn quoted(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
