use dwi_core::models::screening::ScreeningInput;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::answer_key::{MAST_QUESTIONS, MastAnswer};
use crate::error::ScreeningError;

/// A questionnaire answer the scorer will ignore or never match.
///
/// Scoring never fails on these; validation exists so the form layer can
/// flag them before the paperwork is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question: i64,
    pub answer: String,
    pub message: String,
}

/// Collect every answer outside the questionnaire's vocabulary.
pub fn validate_input(input: &ScreeningInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(q1) = input.q1
        && q1 < 0
    {
        errors.push(ValidationError {
            question: 1,
            answer: q1.to_string(),
            message: format!("question 1: count {q1} is negative"),
        });
    }

    for (&question, answer) in &input.mast_answers {
        let in_range = u32::try_from(question).is_ok_and(|q| MAST_QUESTIONS.contains(&q));
        if !in_range {
            errors.push(ValidationError {
                question,
                answer: answer.clone(),
                message: format!(
                    "question {question} is not a MAST question ({}-{})",
                    MAST_QUESTIONS.start(),
                    MAST_QUESTIONS.end(),
                ),
            });
            continue;
        }

        let normalized = answer.trim().to_uppercase();
        if normalized != MastAnswer::Yes.as_str() && normalized != MastAnswer::No.as_str() {
            errors.push(ValidationError {
                question,
                answer: answer.clone(),
                message: format!("question {question}: answer '{answer}' is not YES or NO"),
            });
        }
    }

    errors
}

/// Fail on the first answer [`validate_input`] would report.
pub fn ensure_valid(input: &ScreeningInput) -> Result<(), ScreeningError> {
    match validate_input(input).into_iter().next() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
