pub mod intake;

pub use intake::{IntakeRequest, IntakeResponse, ResumeRecord, ValidatedIntake};
