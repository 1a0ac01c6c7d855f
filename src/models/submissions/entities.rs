use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 提交记录业务模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub student_id: i64,
    pub assignment_id: i64,
    pub submit_time: DateTime<Utc>,
    pub file_path: String,
}
