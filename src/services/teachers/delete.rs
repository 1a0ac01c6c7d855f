use tracing::info;

use super::TeacherService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_teacher;
use crate::models::auth::entities::Principal;

pub async fn delete_teacher(
    service: &TeacherService,
    principal: &Principal,
    teacher_id: i64,
) -> Result<()> {
    require_teacher(principal)?;

    // 存储层在单事务内执行级联：关联 → 提交 → 作业 → 教师 → 用户账号
    let deleted = service.storage.delete_teacher(teacher_id).await?;
    if !deleted {
        return Err(EduSystemError::not_found(format!(
            "Teacher {teacher_id} not found"
        )));
    }

    info!("教师 {} 已被 {} 删除", teacher_id, principal.username);
    Ok(())
}
