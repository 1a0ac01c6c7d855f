use serde::{Deserialize, Serialize};

// 教师档案业务模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub user_id: i64,
}
