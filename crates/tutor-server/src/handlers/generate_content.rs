use actix_web::{web, HttpResponse};
use serde::Serialize;
use tutor_core::{build_prompt, GenerateContentPayload, GenerationRequest};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub content: String,
}

pub async fn handler(
    state: web::Data<AppState>,
    payload: web::Json<GenerateContentPayload>,
) -> Result<HttpResponse> {
    let request = GenerationRequest::try_from(payload.into_inner()).map_err(|e| {
        log::warn!("Rejected generate-content request: {}", e);
        e
    })?;

    log::info!(
        "Generating content: style={}, topic_chars={}",
        request.learning_style.label().unwrap_or("default"),
        request.topic.chars().count()
    );

    let spec = build_prompt(request.learning_style, &request.topic);
    let content = state.pipeline.run(&spec).await?;

    Ok(HttpResponse::Ok().json(GenerateContentResponse {
        content: content.text,
    }))
}
