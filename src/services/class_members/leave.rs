use tracing::info;

use super::ClassMemberService;
use crate::errors::Result;
use crate::gate::require_teacher;
use crate::models::auth::entities::Principal;

pub async fn remove_student(
    service: &ClassMemberService,
    principal: &Principal,
    student_id: i64,
    class_id: i64,
) -> Result<bool> {
    require_teacher(principal)?;

    let removed = service
        .storage
        .remove_student_from_class(student_id, class_id)
        .await?;

    if removed {
        info!("学生 {} 被移出班级 {}", student_id, class_id);
    }
    Ok(removed)
}
