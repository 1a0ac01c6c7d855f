use serde::{Deserialize, Serialize};

/// 创建课程请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub credit: i32,
}

/// 更新课程请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub credit: Option<i32>,
}
