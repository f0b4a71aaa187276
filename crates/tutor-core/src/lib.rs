pub mod error;
pub mod prompts;
pub mod request;
pub mod truncation;
pub mod types;

pub use error::CoreError;
pub use prompts::build_prompt;
pub use request::{GenerateContentPayload, GenerationRequest, LearningStyle};
pub use types::{ChatMessage, CompletionResult, FinalContent, PromptSpec, Role};
