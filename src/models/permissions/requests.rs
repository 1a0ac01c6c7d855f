use serde::{Deserialize, Serialize};

/// 创建权限请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePermissionRequest {
    pub permission_name: String,
    pub description: Option<String>,
}

/// 授予用户权限请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignPermissionRequest {
    pub permission_id: i64,
}
