pub mod assign;
pub mod create;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::permissions::{entities::Permission, requests::CreatePermissionRequest};
use crate::storage::Storage;

pub struct PermissionService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl PermissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 创建权限
    pub async fn create_permission(&self, request: CreatePermissionRequest) -> Result<Permission> {
        create::create_permission(self, request).await
    }

    // 授予用户权限；已授予时返回 false
    pub async fn assign_to_user(&self, user_id: i64, permission_id: i64) -> Result<bool> {
        assign::assign_to_user(self, user_id, permission_id).await
    }

    // 用户拥有的权限
    pub async fn user_permissions(&self, user_id: i64) -> Result<Vec<Permission>> {
        list::user_permissions(self, user_id).await
    }
}
