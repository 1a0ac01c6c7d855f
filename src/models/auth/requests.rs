use serde::Deserialize;

// 用户登录请求
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// 用户名
    pub username: String,
    /// 密码
    pub password: String,
}
