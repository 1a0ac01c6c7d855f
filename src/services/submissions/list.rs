use super::SubmissionService;
use crate::errors::{EduSystemError, Result};
use crate::gate::{require_student, require_teacher};
use crate::models::auth::entities::Principal;
use crate::models::submissions::entities::Submission;

pub async fn my_submissions(
    service: &SubmissionService,
    principal: &Principal,
) -> Result<Vec<Submission>> {
    let student_id = require_student(principal)?;
    service.storage.submissions_by_student(student_id).await
}

pub async fn submissions_by_assignment(
    service: &SubmissionService,
    principal: &Principal,
    assignment_id: i64,
) -> Result<Vec<Submission>> {
    require_teacher(principal)?;

    if service
        .storage
        .get_assignment_by_id(assignment_id)
        .await?
        .is_none()
    {
        return Err(EduSystemError::not_found(format!(
            "Assignment {assignment_id} not found"
        )));
    }

    service.storage.submissions_by_assignment(assignment_id).await
}

pub async fn list_submissions(
    service: &SubmissionService,
    principal: &Principal,
) -> Result<Vec<Submission>> {
    require_teacher(principal)?;
    service.storage.list_submissions().await
}
