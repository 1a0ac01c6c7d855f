use serde::{Deserialize, Serialize};

// 课程业务模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub credit: i32,
}
