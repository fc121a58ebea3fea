//! dwi-screening
//!
//! NDP (problem-drinker) screening. Maps the intake questionnaire to a
//! 1–7 score and a risk category, using the MAST sub-score (questions
//! 6–30) as an internal signal. Pure and synchronous; no I/O.

pub mod answer_key;
pub mod error;
pub mod record;
pub mod scoring;
pub mod validate;

pub use scoring::{Score, ScreeningResult, score};
