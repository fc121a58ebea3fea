//! dwi-core
//!
//! Pure domain types for DWI intake screening: the questionnaire answer
//! shape, the NDP risk category, and the student record it is attached to.
//! No scoring logic lives here; see `dwi-screening`.

pub mod error;
pub mod models;
