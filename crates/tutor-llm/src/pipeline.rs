//! Completion-and-repair pipeline.
//!
//! One primary call per prompt. If the trimmed reply does not end in terminal
//! punctuation, exactly one repair call is made with the reply's tail as
//! context and its trimmed text is appended after a single space. Errors from
//! either call abort the run; nothing is retried here.

use std::sync::Arc;

use tutor_core::truncation::{is_truncated, join_repair, repair_prompt};
use tutor_core::{CompletionResult, FinalContent, PromptSpec};

use crate::provider::{CompletionProvider, Result};

#[derive(Clone)]
pub struct CompletionPipeline {
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionPipeline {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn run(&self, spec: &PromptSpec) -> Result<FinalContent> {
        let primary = self.complete(spec).await?;

        if !is_truncated(&primary.text) {
            return Ok(primary.into());
        }

        log::info!(
            "Completion looks truncated ({} chars), requesting continuation",
            primary.text.chars().count()
        );

        let repair = self.complete(&repair_prompt(&primary.text)).await?;

        Ok(FinalContent {
            text: join_repair(&primary.text, &repair.text),
        })
    }

    async fn complete(&self, spec: &PromptSpec) -> Result<CompletionResult> {
        log::debug!(
            "Requesting completion: max_tokens={}, temperature={:?}",
            spec.max_tokens,
            spec.temperature
        );

        let completion = self
            .provider
            .chat_completion(&spec.messages(), Some(spec.max_tokens), spec.temperature, None)
            .await
            .map_err(|e| {
                log::error!("Completion request failed: {}", e);
                e
            })?;

        Ok(CompletionResult::new(&completion.text))
    }
}
