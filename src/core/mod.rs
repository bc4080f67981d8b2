// src/core/mod.rs
//! Configuration, outbound HTTP and the intake pipeline

pub mod config_manager;
pub mod downloader;
pub mod pipeline;
pub mod service_client;
#[cfg(test)]
pub(crate) mod test_server;

pub use config_manager::ConfigManager;
pub use downloader::Downloader;
pub use pipeline::{DocumentSource, IntakePipeline, ResumeSink};
pub use service_client::ServiceClient;
