use super::PermissionService;
use crate::errors::Result;
use crate::models::permissions::entities::Permission;

pub async fn user_permissions(
    service: &PermissionService,
    user_id: i64,
) -> Result<Vec<Permission>> {
    service.storage.user_permissions(user_id).await
}
