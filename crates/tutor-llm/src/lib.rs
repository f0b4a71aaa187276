pub mod pipeline;
pub mod provider;
pub mod providers;

pub use pipeline::CompletionPipeline;
pub use provider::{Completion, CompletionProvider, LLMError, TokenUsage};
pub use providers::OpenAIProvider;
