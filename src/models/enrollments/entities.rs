use serde::{Deserialize, Serialize};

/// 成绩单条目，选课记录与课程信息的联查结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub course_id: i64,
    pub course_name: String,
    pub credit: i32,
    pub grade: Option<f64>,
}
