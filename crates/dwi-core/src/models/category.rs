use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The qualitative risk tier attached to an NDP score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum NdpCategory {
    #[serde(rename = "No Problem")]
    NoProblem,
    #[serde(rename = "Potential Problem")]
    PotentialProblem,
    #[serde(rename = "Evident Problem")]
    EvidentProblem,
}

impl NdpCategory {
    /// The label shown on the student record.
    pub fn as_str(&self) -> &'static str {
        match self {
            NdpCategory::NoProblem => "No Problem",
            NdpCategory::PotentialProblem => "Potential Problem",
            NdpCategory::EvidentProblem => "Evident Problem",
        }
    }
}

impl fmt::Display for NdpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
