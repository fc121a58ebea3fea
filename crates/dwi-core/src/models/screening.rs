use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Questionnaire answers collected on the intake paperwork.
///
/// Every field is optional. An absent `q1` is not the same as `Some(0)`;
/// an absent string answer behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ScreeningInput {
    /// Frequency-style answer (0, 1, or 2+).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q1: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q5: Option<String>,
    /// MAST answers keyed by question number. Only 6 through 30 are read;
    /// other numbers are kept so validation can report them.
    #[serde(rename = "mast_q6_30", alias = "mastAnswers")]
    pub mast_answers: BTreeMap<i64, String>,
}

impl ScreeningInput {
    /// Record a MAST answer, replacing any previous answer for `question`.
    pub fn with_mast(mut self, question: i64, answer: impl Into<String>) -> Self {
        self.mast_answers.insert(question, answer.into());
        self
    }
}
