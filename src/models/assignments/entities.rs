use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 作业业务模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub content: String,
    pub deadline: DateTime<Utc>,
    pub status: String,
    pub teacher_id: i64,
}
