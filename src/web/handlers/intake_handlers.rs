// src/web/handlers/intake_handlers.rs
//! Resume submission handler

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::State;
use tracing::{error, info, info_span, Instrument};

use crate::core::IntakePipeline;
use crate::types::{IntakeRequest, IntakeResponse};
use crate::web::types::{api_error, ApiError, ErrorResponse};

pub async fn submit_resumes_handler(
    request: Result<Json<IntakeRequest>, json::Error<'_>>,
    pipeline: &State<IntakePipeline>,
) -> Result<Json<IntakeResponse>, ApiError> {
    let request = match request {
        Ok(Json(request)) => request,
        Err(e) => {
            error!("Rejected request body: {}", e);
            return Err((
                Status::BadRequest,
                Json(ErrorResponse::new(format!("Invalid request body: {}", e))),
            ));
        }
    };

    let intake = request.validate().map_err(|e| {
        error!("Error: Missing required fields.");
        api_error(e)
    })?;

    let span = info_span!(
        "submit_resumes",
        request_id = %uuid::Uuid::new_v4(),
        posting_id = %intake.posting_id,
        batch_id = %intake.batch_id,
    );

    async {
        info!("Processing resume for company {}", intake.company_name);

        match pipeline.process(&intake).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => {
                error!("Error occurred: {}", e);
                Err(api_error(e))
            }
        }
    }
    .instrument(span)
    .await
}
