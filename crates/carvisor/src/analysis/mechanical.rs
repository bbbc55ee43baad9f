use crate::analysis::listing::AnalysisRequest;
use serde::{Deserialize, Serialize};

/// Identification of the concrete drivetrain, as far as the assessor can
/// pin it down from year and specs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivetrainIdentification {
    pub engine_code: String,
    pub transmission_name: String,
    pub generation: Option<String>,
}

/// Opaque expert assessment of mechanical reliability.
///
/// The production assessor is a language-model service; tests and demos use
/// deterministic stand-ins. The blender only consumes the score, the rest is
/// narrative for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechanicalAssessment {
    /// 0-100, higher is more reliable.
    pub mechanical_score: u8,
    pub identification: DrivetrainIdentification,
    pub general_comment: String,
    pub engine_reliability: String,
    pub transmission_reliability: String,
    pub km_endurance_check: String,
    pub verdict: String,
}

/// Failure modes of the external assessor. All of them degrade gracefully:
/// the analysis pipeline proceeds without the mechanical component.
#[derive(Debug, thiserror::Error)]
pub enum AssessorError {
    #[error("mechanical assessor is not configured")]
    Unavailable,
    #[error("mechanical assessor transport failed: {0}")]
    Transport(String),
    #[error("mechanical assessor returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Seam for the external mechanical-reliability collaborator.
pub trait MechanicalAssessor: Send + Sync {
    fn assess(&self, request: &AnalysisRequest) -> Result<MechanicalAssessment, AssessorError>;
}
