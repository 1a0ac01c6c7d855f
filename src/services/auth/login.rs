use tracing::info;

use super::AuthService;
use crate::errors::{EduSystemError, Result};
use crate::models::auth::{requests::LoginRequest, responses::AuthToken};
use crate::utils::jwt::JwtUtils;
use crate::utils::verify_password;

pub async fn login(service: &AuthService, request: LoginRequest) -> Result<AuthToken> {
    let user = service
        .storage
        .get_user_by_username(&request.username)
        .await?;

    // 用户不存在与密码错误返回同一错误，不泄露账号是否存在
    let user = match user {
        Some(user) if verify_password(&request.password, &user.password_hash) => user,
        _ => {
            info!("用户 {} 登录失败", request.username);
            return Err(EduSystemError::unauthenticated(
                "Incorrect username or password",
            ));
        }
    };

    let token = JwtUtils::generate_access_token(&user.username)
        .map_err(|e| EduSystemError::token_creation(format!("签发令牌失败: {e}")))?;

    info!("用户 {} 登录成功", user.username);
    Ok(AuthToken::bearer(token))
}
