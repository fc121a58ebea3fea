use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// MAST question numbers on the intake form.
pub const MAST_QUESTIONS: RangeInclusive<u32> = 6..=30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum MastAnswer {
    Yes,
    No,
}

impl MastAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            MastAnswer::Yes => "YES",
            MastAnswer::No => "NO",
        }
    }
}

use MastAnswer::{No, Yes};

/// The answer that counts as a positive indicator, indexed from question 6.
const MAST_KEY: [MastAnswer; 25] = [
    No,  // 6
    Yes, // 7
    Yes, // 8
    No,  // 9
    Yes, // 10
    No,  // 11
    Yes, // 12
    No,  // 13
    Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, Yes, // 14–30
];

/// Expected answer for a MAST question, or `None` outside 6–30.
pub fn expected_answer(question: u32) -> Option<MastAnswer> {
    if !MAST_QUESTIONS.contains(&question) {
        return None;
    }
    MAST_KEY.get((question - MAST_QUESTIONS.start()) as usize).copied()
}

/// The full key as `(question, answer)` pairs in question order.
pub fn entries() -> impl Iterator<Item = (u32, MastAnswer)> {
    MAST_QUESTIONS.zip(MAST_KEY)
}
