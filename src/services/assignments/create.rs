use tracing::info;

use super::AssignmentService;
use crate::errors::Result;
use crate::gate::require_teacher;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::models::auth::entities::Principal;

pub async fn create_assignment(
    service: &AssignmentService,
    principal: &Principal,
    request: CreateAssignmentRequest,
) -> Result<Assignment> {
    // 作业归属操作教师本人，请求里不接受他人 ID
    let teacher_id = require_teacher(principal)?;

    let assignment = service
        .storage
        .create_assignment(teacher_id, request)
        .await?;

    info!(
        "教师 {} 布置作业 (ID: {}, 截止 {})",
        teacher_id, assignment.id, assignment.deadline
    );
    Ok(assignment)
}
