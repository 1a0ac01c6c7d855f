use serde::Deserialize;

// 用户注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}
