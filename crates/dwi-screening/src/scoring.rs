use dwi_core::models::category::NdpCategory;
use dwi_core::models::screening::ScreeningInput;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::answer_key::{self, MAST_QUESTIONS};

/// Outcome of scoring one screening. Always fully recomputed, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScreeningResult {
    /// Count of MAST questions 6–30 matching the answer key (0–25).
    pub mast_score: u8,
    pub category: NdpCategory,
    /// Final risk score, 1–7.
    pub ndp_score: u8,
}

/// How many rules fired towards each tier. Each rule counts at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleTally {
    pub evident: u8,
    pub potential: u8,
    pub no_problem: u8,
}

/// Score a screening. `None` means no screening has been submitted yet and
/// yields `None` without computing anything.
pub fn score(screening: Option<&ScreeningInput>) -> Option<ScreeningResult> {
    let input = screening?;
    let (result, tally) = evaluate(input);

    debug!(
        mast_score = result.mast_score,
        evident = tally.evident,
        potential = tally.potential,
        no_problem = tally.no_problem,
        ndp_score = result.ndp_score,
        category = %result.category,
        "scored screening"
    );

    Some(result)
}

/// Scoring as a method on the input itself.
pub trait Score {
    fn score(&self) -> ScreeningResult;
}

impl Score for ScreeningInput {
    fn score(&self) -> ScreeningResult {
        evaluate(self).0
    }
}

/// Number of MAST answers that match the key. Answers outside 6–30 are ignored.
pub fn mast_score(input: &ScreeningInput) -> u8 {
    MAST_QUESTIONS
        .filter(|q| {
            let Some(answer) = input.mast_answers.get(&i64::from(*q)) else {
                return false;
            };
            answer_key::expected_answer(*q)
                .is_some_and(|expected| normalize(Some(answer.as_str())) == expected.as_str())
        })
        .count() as u8
}

/// Evaluate every rule and count how many fire towards each tier.
pub fn tally(input: &ScreeningInput, mast: u8) -> RuleTally {
    let q1 = input.q1;
    let q2 = normalize(input.q2.as_deref());
    let q3 = normalize(input.q3.as_deref());
    let q4 = normalize(input.q4.as_deref());
    let q5 = normalize(input.q5.as_deref());

    let evident = [
        q1.is_some_and(|n| n >= 2),
        q5 == "YES",
        mast >= 7,
    ];
    let potential = [
        q1 == Some(1),
        q2 == "YES",
        q3 == "STRANGER" || q3 == "ALONE",
        q4 == "YES" || q4 == "NOT SURE",
        q5 == "NOT SURE",
        (4..=6).contains(&mast),
    ];
    let no_problem = [q1 == Some(0), q2 == "NO", mast <= 3];

    RuleTally {
        evident: fired(&evident),
        potential: fired(&potential),
        no_problem: fired(&no_problem),
    }
}

/// First matching tier wins: evident, then potential, then no problem.
///
/// Potential counts above 4 are not distinguished from 4; the tier tops
/// out at 5. The no-problem count never affects the score.
pub fn classify(tally: RuleTally) -> (NdpCategory, u8) {
    if tally.evident > 0 {
        let ndp = if tally.evident >= 2 { 7 } else { 6 };
        (NdpCategory::EvidentProblem, ndp)
    } else if tally.potential > 0 {
        let ndp = match tally.potential {
            1 => 2,
            2 => 3,
            3 => 4,
            _ => 5,
        };
        (NdpCategory::PotentialProblem, ndp)
    } else {
        (NdpCategory::NoProblem, 1)
    }
}

fn evaluate(input: &ScreeningInput) -> (ScreeningResult, RuleTally) {
    let mast = mast_score(input);
    let tally = tally(input, mast);
    let (category, ndp_score) = classify(tally);
    let result = ScreeningResult {
        mast_score: mast,
        category,
        ndp_score,
    };
    (result, tally)
}

fn fired(rules: &[bool]) -> u8 {
    rules.iter().filter(|r| **r).count() as u8
}

fn normalize(answer: Option<&str>) -> String {
    answer.map(|a| a.trim().to_uppercase()).unwrap_or_default()
}
