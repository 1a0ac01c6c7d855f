use super::TeacherService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_own_teacher;
use crate::models::auth::entities::Principal;
use crate::models::teachers::{entities::Teacher, requests::UpdateTeacherRequest};

pub async fn update_teacher(
    service: &TeacherService,
    principal: &Principal,
    teacher_id: i64,
    update: UpdateTeacherRequest,
) -> Result<Teacher> {
    // 所有权谓词：请求中的教师 ID 必须是主体自己的
    require_own_teacher(principal, teacher_id)?;

    service
        .storage
        .update_teacher(teacher_id, update)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Teacher {teacher_id} not found")))
}
