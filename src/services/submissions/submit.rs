use chrono::Utc;
use tracing::{error, info};

use super::SubmissionService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_student;
use crate::models::auth::entities::Principal;
use crate::models::submissions::{entities::Submission, requests::SubmitAssignmentRequest};

pub async fn submit(
    service: &SubmissionService,
    principal: &Principal,
    assignment_id: i64,
    request: SubmitAssignmentRequest,
) -> Result<Submission> {
    let student_id = require_student(principal)?;

    let assignment = service
        .storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| {
            EduSystemError::not_found(format!("Assignment {assignment_id} not found"))
        })?;

    let now = Utc::now();
    if now > assignment.deadline {
        return Err(EduSystemError::deadline_passed(format!(
            "Assignment {assignment_id} deadline was {}",
            assignment.deadline
        )));
    }

    // 先存文件再写记录；记录写入失败时必须删除已存的文件，不留孤儿
    let file_path = service
        .blobstore
        .store(&request.content, &request.file_name)
        .await?;

    match service
        .storage
        .create_submission(student_id, assignment_id, now, &file_path)
        .await
    {
        Ok(submission) => {
            info!(
                "学生 {} 提交作业 {} (submission_id: {})",
                student_id, assignment_id, submission.id
            );
            Ok(submission)
        }
        Err(insert_err) => match service.blobstore.remove(&file_path).await {
            Ok(_) => Err(insert_err),
            // 补偿清理自身失败不吞掉，作为独立错误上报
            Err(cleanup_err) => {
                error!(
                    "提交记录写入失败且文件清理失败: {} / {}",
                    insert_err, cleanup_err
                );
                Err(EduSystemError::storage(format!(
                    "Submission insert failed ({insert_err}); orphaned blob cleanup also failed ({cleanup_err})"
                )))
            }
        },
    }
}
