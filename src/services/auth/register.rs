use tracing::info;

use super::AuthService;
use crate::errors::{EduSystemError, Result};
use crate::models::users::{entities::User, requests::RegisterUserRequest};
use crate::utils::hash_password;
use crate::utils::validate::validate_account;

pub async fn register(service: &AuthService, mut request: RegisterUserRequest) -> Result<User> {
    validate_account(&request.username, &request.email, &request.password)
        .map_err(EduSystemError::validation)?;

    // 入库前哈希，明文密码不落盘
    request.password = hash_password(&request.password)?;

    let user = service.storage.create_user(request).await?;
    info!("用户 {} 注册成功 (ID: {})", user.username, user.id);

    Ok(user)
}
