use serde::Deserialize;

// 创建教师请求（同时创建其背后的用户账号）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub title: String,
    pub department: String,
}

// 更新教师档案请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeacherRequest {
    pub title: Option<String>,
    pub department: Option<String>,
}
