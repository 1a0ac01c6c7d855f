use super::{SubmissionService, check_submission_access};
use crate::errors::{EduSystemError, Result};
use crate::models::auth::entities::Principal;
use crate::models::submissions::responses::SubmissionFile;

pub async fn download(
    service: &SubmissionService,
    principal: &Principal,
    submission_id: i64,
) -> Result<SubmissionFile> {
    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| {
            EduSystemError::not_found(format!("Submission {submission_id} not found"))
        })?;

    check_submission_access(principal, submission.student_id)?;

    let content = service.blobstore.read(&submission.file_path).await?;

    Ok(SubmissionFile {
        submission,
        content,
    })
}
