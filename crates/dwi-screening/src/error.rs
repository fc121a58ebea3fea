use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
