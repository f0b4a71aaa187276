use serde::{Deserialize, Serialize};

/// Temperature the provider applies when a request does not send one.
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Fully parameterized payload for a single provider call.
///
/// Built once per request by the style dispatcher (or by the repair step)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub system_role: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    /// `None` leaves the provider default in place and is not sent on the wire.
    pub temperature: Option<f32>,
}

impl PromptSpec {
    pub fn new(
        system_role: impl Into<String>,
        user_prompt: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            system_role: system_role.into(),
            user_prompt: user_prompt.into(),
            max_tokens,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn effective_temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Ordered chat messages: the system role first, then the user prompt.
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_role.clone()),
            ChatMessage::user(self.user_prompt.clone()),
        ]
    }
}

/// Text returned by one provider call, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub text: String,
}

impl CompletionResult {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }
}

/// What the caller gets back: the primary text, extended by at most one repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalContent {
    pub text: String,
}

impl From<CompletionResult> for FinalContent {
    fn from(result: CompletionResult) -> Self {
        Self { text: result.text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_system_then_user() {
        let spec = PromptSpec::new("You are a helpful assistant.", "Explain gravity", 800);
        let messages = spec.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You are a helpful assistant.");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Explain gravity");
    }

    #[test]
    fn test_unset_temperature_defaults_to_one() {
        let spec = PromptSpec::new("role", "prompt", 10);
        assert_eq!(spec.temperature, None);
        assert_eq!(spec.effective_temperature(), 1.0);

        let spec = spec.with_temperature(0.6);
        assert_eq!(spec.temperature, Some(0.6));
        assert_eq!(spec.effective_temperature(), 0.6);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn test_completion_result_trims_whitespace() {
        let result = CompletionResult::new("\n  Some text.  \n");
        assert_eq!(result.text, "Some text.");
    }
}
