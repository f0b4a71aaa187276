//! Startup connectivity check against the completion provider.

use tutor_core::ChatMessage;
use tutor_llm::{CompletionProvider, LLMError};

const PROBE_PROMPT: &str = "Test";
const PROBE_MAX_TOKENS: u32 = 5;

/// Send one tiny completion and log the outcome. Callers decide whether to
/// care about the result; the server starts either way.
pub async fn run_startup_probe(
    provider: &dyn CompletionProvider,
    model: &str,
) -> Result<(), LLMError> {
    let messages = [ChatMessage::user(PROBE_PROMPT)];
    match provider
        .chat_completion(&messages, Some(PROBE_MAX_TOKENS), None, Some(model))
        .await
    {
        Ok(_) => {
            log::info!("OpenAI API connection successful");
            Ok(())
        }
        Err(e) => {
            log::error!("Error with OpenAI API key: {}", e);
            Err(e)
        }
    }
}
