use tracing::info;

use super::ClassService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_teacher;
use crate::models::auth::entities::Principal;

pub async fn delete_class(
    service: &ClassService,
    principal: &Principal,
    class_id: i64,
) -> Result<()> {
    require_teacher(principal)?;

    // 存储层在单事务内执行级联：学生关联 → 教师关联 → 班级
    let deleted = service.storage.delete_class(class_id).await?;
    if !deleted {
        return Err(EduSystemError::not_found(format!(
            "Class {class_id} not found"
        )));
    }

    info!("班级 {} 已被 {} 删除", class_id, principal.username);
    Ok(())
}
