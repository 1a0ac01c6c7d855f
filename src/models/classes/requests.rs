use serde::{Deserialize, Serialize};

/// 创建班级请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: String,
    pub grade_level: String,
}

/// 更新班级请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub grade_level: Option<String>,
}
