//! 主体解析缓存
//!
//! 令牌 → 认证主体的 TTL 读穿缓存，纯优化：缓存里只有重新解析
//! 令牌也能得到的内容，过期后自动回源。

use moka::future::Cache;
use tracing::debug;

use crate::config::AppConfig;
use crate::models::auth::entities::Principal;

pub struct PrincipalCache {
    inner: Cache<String, Principal>,
}

impl PrincipalCache {
    pub fn new() -> Self {
        let config = AppConfig::get();
        let inner = Cache::builder()
            .max_capacity(config.cache.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.cache.default_ttl))
            .support_invalidation_closures()
            .build();

        debug!(
            "PrincipalCache initialized with max capacity: {}",
            config.cache.max_capacity
        );
        Self { inner }
    }

    pub async fn get(&self, token: &str) -> Option<Principal> {
        self.inner.get(token).await
    }

    pub async fn insert(&self, token: String, principal: Principal) {
        self.inner.insert(token, principal).await;
    }

    /// 按用户名失效全部缓存条目（用户被删除或角色变化时调用）
    pub async fn invalidate_username(&self, username: &str) {
        let username = username.to_string();
        // moka 不支持按值索引，遍历失效
        self.inner
            .invalidate_entries_if(move |_, principal| principal.username == username)
            .ok();
    }

    pub async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

impl Default for PrincipalCache {
    fn default() -> Self {
        Self::new()
    }
}
