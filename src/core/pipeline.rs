// src/core/pipeline.rs
//! Download, extract, assemble and forward, in that order

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::IntakeError;
use crate::extract::{Document, Extractor};
use crate::types::{IntakeResponse, ResumeRecord, ValidatedIntake};

/// Where documents come from
#[rocket::async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Document, IntakeError>;
}

/// Where assembled resume records go
#[rocket::async_trait]
pub trait ResumeSink: Send + Sync {
    async fn submit(&self, record: &ResumeRecord) -> Result<serde_json::Value, IntakeError>;
}

#[derive(Clone)]
pub struct IntakePipeline {
    source: Arc<dyn DocumentSource>,
    sink: Arc<dyn ResumeSink>,
    extractor: Extractor,
}

impl IntakePipeline {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        sink: Arc<dyn ResumeSink>,
        extractor: Extractor,
    ) -> Self {
        Self {
            source,
            sink,
            extractor,
        }
    }

    pub async fn process(&self, intake: &ValidatedIntake) -> Result<IntakeResponse, IntakeError> {
        let document = self.source.fetch(&intake.resume_url).await?;

        let extraction = self.extractor.extract_owned(document).await?;

        let record = ResumeRecord::assemble(intake, &extraction);
        debug!("Prepared resume data: {:?}", record);

        let external_response = self.sink.submit(&record).await?;
        info!("Resume for posting {} forwarded", intake.posting_id);

        Ok(IntakeResponse {
            posting_id: intake.posting_id.clone(),
            resume_text: extraction.into_text(),
            external_response,
        })
    }
}
