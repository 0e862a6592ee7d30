use serde::{Deserialize, Serialize};

use super::MetadataRecord;

/// Score for a single platform. `issues` and `strengths` keep rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformScore {
    pub score: u32,
    pub max_score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

impl PlatformScore {
    pub const MAX_SCORE: u32 = 100;

    pub fn empty() -> Self {
        PlatformScore {
            score: 0,
            max_score: Self::MAX_SCORE,
            issues: Vec::new(),
            strengths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub twitter: PlatformScore,
    pub facebook: PlatformScore,
    pub google: PlatformScore,
    pub overall: u32,
}

/// Response body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub metadata: MetadataRecord,
    pub scores: ScoreResult,
}
