use serde::Deserialize;

// 创建学生请求（同时创建其背后的用户账号）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub grade_level: String,
    pub major: String,
}

// 更新学生档案请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub grade_level: Option<String>,
    pub major: Option<String>,
}
