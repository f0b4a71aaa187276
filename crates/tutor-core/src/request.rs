use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

/// The learning styles a client can ask for.
///
/// Labels are matched exactly (case-sensitive, untrimmed). Anything else,
/// including the empty string, resolves to [`LearningStyle::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningStyle {
    Visual,
    Analytical,
    ApplicationBased,
    CreativityBased,
    StoryBased,
    Default,
}

impl LearningStyle {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Visual" => LearningStyle::Visual,
            "Analytical" => LearningStyle::Analytical,
            "Application-based" => LearningStyle::ApplicationBased,
            "Creativity-based" => LearningStyle::CreativityBased,
            "Story-based" => LearningStyle::StoryBased,
            _ => LearningStyle::Default,
        }
    }

    /// Wire label, `None` for the fallback variant.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            LearningStyle::Visual => Some("Visual"),
            LearningStyle::Analytical => Some("Analytical"),
            LearningStyle::ApplicationBased => Some("Application-based"),
            LearningStyle::CreativityBased => Some("Creativity-based"),
            LearningStyle::StoryBased => Some("Story-based"),
            LearningStyle::Default => None,
        }
    }
}

/// Raw body of `POST /api/generate-content`.
///
/// Fields are kept as raw JSON so validation can apply one truthiness rule
/// to every value type. Absent and `null` both arrive as `None`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GenerateContentPayload {
    #[serde(default)]
    pub learning_style: Option<Value>,
    #[serde(default)]
    pub topic: Option<Value>,
}

/// `false`, zero, empty containers and `null` count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Strings pass through untouched; other values use their JSON text.
fn render(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// A validated generation request with the style already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub learning_style: LearningStyle,
    pub topic: String,
}

impl TryFrom<GenerateContentPayload> for GenerationRequest {
    type Error = CoreError;

    fn try_from(payload: GenerateContentPayload) -> Result<Self, Self::Error> {
        let learning_style = match payload.learning_style {
            None => return Err(CoreError::MissingField),
            // An empty label is accepted and falls back to the default template.
            Some(Value::String(label)) => LearningStyle::from_label(&label),
            Some(value) if is_blank(&value) => return Err(CoreError::MissingField),
            Some(_) => LearningStyle::Default,
        };

        let topic = payload
            .topic
            .filter(|topic| !is_blank(topic))
            .map(render)
            .ok_or(CoreError::MissingField)?;

        if learning_style == LearningStyle::Default {
            log::debug!("Unrecognized learning style, using default template");
        }

        Ok(Self {
            learning_style,
            topic,
        })
    }
}
