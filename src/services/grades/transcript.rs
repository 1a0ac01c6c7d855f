use super::GradeService;
use crate::errors::{EduSystemError, Result};
use crate::models::enrollments::entities::TranscriptEntry;

pub async fn transcript(service: &GradeService, student_id: i64) -> Result<Vec<TranscriptEntry>> {
    if service.storage.get_student_by_id(student_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Student {student_id} not found"
        )));
    }

    service.storage.transcript(student_id).await
}
