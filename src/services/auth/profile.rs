use super::AuthService;
use crate::errors::{EduSystemError, Result};
use crate::models::auth::entities::Principal;

/// 返回当前主体的最新状态
///
/// 不直接回显缓存的主体，角色集合从库里重新解析。
pub async fn profile(service: &AuthService, principal: &Principal) -> Result<Principal> {
    let user = service
        .storage
        .get_user_by_id(principal.user_id)
        .await?
        .ok_or_else(|| EduSystemError::unauthenticated("User no longer exists"))?;

    let student = service.storage.student_profile_of(user.id).await?;
    let teacher = service.storage.teacher_profile_of(user.id).await?;

    Ok(Principal {
        user_id: user.id,
        username: user.username,
        email: user.email,
        student_id: student.map(|s| s.id),
        teacher_id: teacher.map(|t| t.id),
    })
}
