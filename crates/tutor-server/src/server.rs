use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, middleware, web, App, HttpRequest, HttpServer};
use std::io;

use tutor_core::CoreError;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::handlers;
use crate::probe::run_startup_probe;
use crate::state::{build_provider, AppState};

/// Routes under `/api`. Shared by the real server and the integration tests.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/message", web::get().to(handlers::message::handler))
            .route(
                "/generate-content",
                web::post().to(handlers::generate_content::handler),
            ),
    );
}

// Unparseable bodies get the same 400 as a body with missing fields.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Failed to parse request body: {}", err);
    AppError::from(CoreError::MissingField).into()
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    log::info!("Initializing server with config: {:?}", config);

    let provider = build_provider(&config.llm);

    if config.startup_probe {
        let probe_provider = provider.clone();
        let probe_model = config.llm.probe_model.clone();
        actix_web::rt::spawn(async move {
            let _ = run_startup_probe(probe_provider.as_ref(), &probe_model).await;
        });
    } else {
        log::info!("Startup probe disabled");
    }

    let state = web::Data::new(AppState::new(provider));

    log::info!(
        "Starting tutor server on http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(app_config)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
