//! Keeps the NDP pair on a student record in step with its paperwork.

use dwi_core::models::student::{NdpAssessment, Paperwork, Student};
use tracing::{debug, info};

use crate::scoring::{self, ScreeningResult};

impl From<ScreeningResult> for NdpAssessment {
    fn from(result: ScreeningResult) -> Self {
        NdpAssessment {
            score: result.ndp_score,
            category: result.category,
            mast_score: result.mast_score,
        }
    }
}

/// Store new paperwork on `student` and replace its NDP pair.
pub fn update_paperwork(student: &mut Student, paperwork: Paperwork, now: jiff::Timestamp) {
    student.paperwork = Some(paperwork);
    student.updated_at = now;
    recompute(student);
}

/// Re-derive the NDP pair from the student's current paperwork.
///
/// The previous pair is always replaced wholesale. Without a screening the
/// scorer is not invoked and the pair is cleared.
pub fn recompute(student: &mut Student) {
    let Some(screening) = student.screening() else {
        debug!(student_id = %student.id, "no screening submitted, clearing NDP score");
        student.ndp = None;
        return;
    };

    let assessment = scoring::score(Some(screening)).map(NdpAssessment::from);
    if let Some(a) = &assessment {
        info!(
            student_id = %student.id,
            score = a.score,
            category = %a.category,
            "NDP score updated"
        );
    }
    student.ndp = assessment;
}
