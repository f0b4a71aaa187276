use actix_web::{HttpResponse, Responder};
use serde::Serialize;

pub const LIVENESS_MESSAGE: &str = "Hello from Flask";

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: LIVENESS_MESSAGE,
    })
}
