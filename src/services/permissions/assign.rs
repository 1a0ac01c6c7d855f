use tracing::info;

use super::PermissionService;
use crate::errors::{EduSystemError, Result};

pub async fn assign_to_user(
    service: &PermissionService,
    user_id: i64,
    permission_id: i64,
) -> Result<bool> {
    if service.storage.get_user_by_id(user_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "User {user_id} not found"
        )));
    }
    if service
        .storage
        .get_permission_by_id(permission_id)
        .await?
        .is_none()
    {
        return Err(EduSystemError::not_found(format!(
            "Permission {permission_id} not found"
        )));
    }

    let assigned = service
        .storage
        .assign_permission_to_user(user_id, permission_id)
        .await?;

    if assigned {
        info!("用户 {} 获得权限 {}", user_id, permission_id);
    }
    Ok(assigned)
}
