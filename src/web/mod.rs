// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::{self, Json};
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config_manager::ServerSettings;
use crate::core::{ConfigManager, Downloader, IntakePipeline, ServiceClient};
use crate::extract::Extractor;
use crate::types::{IntakeRequest, IntakeResponse};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/submit-resumes", data = "<request>")]
pub async fn submit_resumes(
    request: Result<Json<IntakeRequest>, json::Error<'_>>,
    pipeline: &State<IntakePipeline>,
) -> Result<Json<IntakeResponse>, ApiError> {
    handlers::submit_resumes_handler(request, pipeline).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found(request: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!("No route for {}", request.uri())))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}

/// Assemble the server around an already-wired pipeline
pub fn build_rocket(pipeline: IntakePipeline, settings: &ServerSettings) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", settings.address.clone()))
        .merge(("port", settings.port));

    rocket::custom(figment)
        .attach(Cors)
        .manage(pipeline)
        .register("/", catchers![not_found, unprocessable, internal_error])
        .mount("/", routes![submit_resumes, health, options])
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let timeout = config.service.timeout();
    let pipeline = IntakePipeline::new(
        Arc::new(Downloader::new(timeout)?),
        Arc::new(ServiceClient::new(
            config.service.intake_service_url.clone(),
            timeout,
        )?),
        Extractor::new(config.ocr.clone()),
    );

    info!(
        "Starting resume intake server on http://{}:{}",
        config.server.address, config.server.port
    );

    if let Err(e) = build_rocket(pipeline, &config.server).launch().await {
        let message = e.to_string();
        error!("Server failed: {}", message);
        anyhow::bail!("Server failed: {}", message);
    }

    Ok(())
}
