use tracing::info;

use super::PermissionService;
use crate::errors::Result;
use crate::models::permissions::{entities::Permission, requests::CreatePermissionRequest};

pub async fn create_permission(
    service: &PermissionService,
    request: CreatePermissionRequest,
) -> Result<Permission> {
    let permission = service.storage.create_permission(request).await?;
    info!(
        "权限 {} 创建成功 (ID: {})",
        permission.permission_name, permission.id
    );
    Ok(permission)
}
