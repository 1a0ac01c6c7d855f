pub mod login;
pub mod profile;
pub mod register;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::{entities::Principal, requests::LoginRequest, responses::AuthToken};
use crate::models::users::{entities::User, requests::RegisterUserRequest};
use crate::storage::Storage;

pub struct AuthService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 注册用户账号
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User> {
        register::register(self, request).await
    }

    // 用户登录，签发访问令牌
    pub async fn login(&self, request: LoginRequest) -> Result<AuthToken> {
        login::login(self, request).await
    }

    // 当前认证主体回显
    pub async fn profile(&self, principal: &Principal) -> Result<Principal> {
        profile::profile(self, principal).await
    }
}
