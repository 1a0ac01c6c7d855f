use tracing::info;

use super::StudentService;
use crate::errors::{EduSystemError, Result};
use crate::models::students::{requests::CreateStudentRequest, responses::StudentProfile};
use crate::utils::hash_password;
use crate::utils::validate::validate_account;

pub async fn create_student(
    service: &StudentService,
    mut request: CreateStudentRequest,
) -> Result<StudentProfile> {
    validate_account(&request.username, &request.email, &request.password)
        .map_err(EduSystemError::validation)?;

    request.password = hash_password(&request.password)?;

    // 用户账号与学生档案在存储层的同一事务内创建
    let profile = service.storage.create_student(request).await?;
    info!(
        "学生 {} 创建成功 (student_id: {}, user_id: {})",
        profile.user.username, profile.student.id, profile.user.id
    );

    Ok(profile)
}
