use serde::{Deserialize, Serialize};

// 权限业务模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub permission_name: String,
    pub description: Option<String>,
}
