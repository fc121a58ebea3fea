use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::NdpCategory;
use super::screening::ScreeningInput;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub paperwork: Option<Paperwork>,
    /// The last computed NDP pair. `None` means there is nothing to display.
    #[serde(default)]
    pub ndp: Option<NdpAssessment>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Student {
    pub fn new(name: impl Into<String>, now: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            paperwork: None,
            ndp: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The screening sub-object of the current paperwork, if any.
    pub fn screening(&self) -> Option<&ScreeningInput> {
        self.paperwork.as_ref().and_then(|p| p.screening.as_ref())
    }
}

/// Intake paperwork submitted by a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Paperwork {
    #[serde(default)]
    pub screening: Option<ScreeningInput>,
    #[serde(default)]
    pub submitted_at: Option<jiff::Timestamp>,
}

/// The `{score, category}` pair stored on a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NdpAssessment {
    pub score: u8,
    pub category: NdpCategory,
    pub mast_score: u8,
}
