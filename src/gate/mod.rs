//! 访问控制门
//!
//! 每个请求先经过这里：Bearer 令牌 → 认证主体 → 角色与所有权检查，
//! 全部通过后才进入领域操作。门本身无请求间状态，令牌之外不保留会话。

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::PrincipalCache;
use crate::errors::{EduSystemError, Result};
use crate::models::auth::entities::Principal;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

const BEARER_PREFIX: &str = "Bearer ";

pub struct AccessGate {
    storage: Arc<dyn Storage>,
    cache: PrincipalCache,
}

impl AccessGate {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            cache: PrincipalCache::new(),
        }
    }

    /// 解析 Authorization 头为认证主体
    ///
    /// 令牌缺失、格式错误、签名无效或对应用户不存在都返回 Unauthenticated。
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Principal> {
        let token = authorization
            .and_then(|h| h.strip_prefix(BEARER_PREFIX))
            .ok_or_else(|| {
                EduSystemError::unauthenticated("Missing or invalid Authorization header")
            })?;

        self.authenticate_token(token).await
    }

    /// 解析裸令牌为认证主体
    pub async fn authenticate_token(&self, token: &str) -> Result<Principal> {
        let claims = JwtUtils::verify_token(token).map_err(|err| {
            info!("JWT token validation failed: {}", err);
            EduSystemError::unauthenticated("Invalid or expired token")
        })?;

        // 缓存命中只省角色解析；用户本身每次都要确认仍然存在，
        // 账号删除后令牌立即失效，不等 TTL
        if let Some(principal) = self.cache.get(token).await {
            if self
                .storage
                .get_user_by_username(&claims.sub)
                .await?
                .is_some()
            {
                debug!("Principal cache hit for user {}", principal.username);
                return Ok(principal);
            }
            self.cache.invalidate_username(&claims.sub).await;
        }

        let principal = self.resolve_principal(&claims.sub).await?;
        self.cache.insert(token.to_string(), principal.clone()).await;

        Ok(principal)
    }

    /// 用户名 → 主体：加载用户并解析其角色档案
    async fn resolve_principal(&self, username: &str) -> Result<Principal> {
        let user = self
            .storage
            .get_user_by_username(username)
            .await?
            .ok_or_else(|| EduSystemError::unauthenticated("Token subject no longer exists"))?;

        let student = self.storage.student_profile_of(user.id).await?;
        let teacher = self.storage.teacher_profile_of(user.id).await?;

        Ok(Principal {
            user_id: user.id,
            username: user.username,
            email: user.email,
            student_id: student.map(|s| s.id),
            teacher_id: teacher.map(|t| t.id),
        })
    }

    /// 角色变化或用户删除后使缓存失效
    pub async fn invalidate(&self, username: &str) {
        self.cache.invalidate_username(username).await;
    }
}

/// 要求学生角色，返回主体的学生 ID
pub fn require_student(principal: &Principal) -> Result<i64> {
    principal
        .student_id
        .ok_or_else(|| EduSystemError::forbidden("This operation requires a student role"))
}

/// 要求教师角色，返回主体的教师 ID
pub fn require_teacher(principal: &Principal) -> Result<i64> {
    principal
        .teacher_id
        .ok_or_else(|| EduSystemError::forbidden("This operation requires a teacher role"))
}

/// 所有权谓词：要求操作目标是主体自己的教师档案
pub fn require_own_teacher(principal: &Principal, teacher_id: i64) -> Result<()> {
    if require_teacher(principal)? == teacher_id {
        Ok(())
    } else {
        Err(EduSystemError::forbidden(
            "You may only act on your own teacher profile",
        ))
    }
}
