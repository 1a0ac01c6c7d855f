use tracing::info;

use super::ClassMemberService;
use crate::errors::{EduSystemError, Result};

pub async fn add_student(
    service: &ClassMemberService,
    student_id: i64,
    class_id: i64,
) -> Result<bool> {
    // 两端都存在才建立关联
    if service.storage.get_student_by_id(student_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Student {student_id} not found"
        )));
    }
    if service.storage.get_class_by_id(class_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Class {class_id} not found"
        )));
    }

    let added = service
        .storage
        .add_student_to_class(student_id, class_id)
        .await?;

    if added {
        info!("学生 {} 加入班级 {}", student_id, class_id);
    }
    Ok(added)
}
