use serde::{Deserialize, Serialize};

// 学生档案业务模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub grade_level: String,
    pub major: String,
    pub user_id: i64,
}
