use tracing::info;

use super::{SubmissionService, check_submission_access};
use crate::errors::{EduSystemError, Result};
use crate::models::auth::entities::Principal;

pub async fn delete(
    service: &SubmissionService,
    principal: &Principal,
    submission_id: i64,
) -> Result<()> {
    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| {
            EduSystemError::not_found(format!("Submission {submission_id} not found"))
        })?;

    check_submission_access(principal, submission.student_id)?;

    // 先删文件：失败则整个操作失败，记录保留，两边保持一致。
    // 文件已经不在（返回 false）不算失败。
    service
        .blobstore
        .remove(&submission.file_path)
        .await
        .map_err(|e| EduSystemError::storage(format!("Failed to remove submission file: {e}")))?;

    service.storage.delete_submission(submission_id).await?;

    info!("提交 {} 已被 {} 删除", submission_id, principal.username);
    Ok(())
}
