use serde::{Deserialize, Serialize};

use crate::models::students::entities::Student;

/// 课程学生列表项，附带该课程的成绩
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseStudent {
    #[serde(flatten)]
    pub student: Student,
    pub grade: Option<f64>,
}
