use tracing::info;

use super::TeacherService;
use crate::errors::{EduSystemError, Result};
use crate::models::teachers::{requests::CreateTeacherRequest, responses::TeacherProfile};
use crate::utils::hash_password;
use crate::utils::validate::validate_account;

pub async fn create_teacher(
    service: &TeacherService,
    mut request: CreateTeacherRequest,
) -> Result<TeacherProfile> {
    validate_account(&request.username, &request.email, &request.password)
        .map_err(EduSystemError::validation)?;

    request.password = hash_password(&request.password)?;

    // 用户账号与教师档案在存储层的同一事务内创建
    let profile = service.storage.create_teacher(request).await?;
    info!(
        "教师 {} 创建成功 (teacher_id: {}, user_id: {})",
        profile.user.username, profile.teacher.id, profile.user.id
    );

    Ok(profile)
}
