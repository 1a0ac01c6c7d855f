use serde::{Deserialize, Serialize};

/// 应用配置结构体
///
/// 所有字段均有默认值，库在没有配置文件的情况下也能直接使用。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub upload: UploadConfig,
    pub argon2: Argon2Config,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
    pub log_dir: String,
}

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    #[serde(skip_serializing)] // 不序列化到JSON响应中
    pub secret: String,
    pub access_token_expiry: i64, // 有效期（分钟）
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub default_ttl: u64, // 主体缓存 TTL（秒）
    pub max_capacity: u64,
}

/// 上传配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub dir: String,     // 提交文件存放目录
    pub max_size: usize, // 单文件最大字节数
}

/// Argon2 哈希参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            jwt: JwtConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            upload: UploadConfig::default(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "EduSystem Core".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            // 仅供开发环境使用，生产环境必须通过 JWT_SECRET 覆盖
            secret: "edusystem-insecure-dev-secret".to_string(),
            access_token_expiry: 30,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://edusystem.db?mode=rwc".to_string(),
            pool_size: 10,
            timeout: 30,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            max_capacity: 10_000,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: "uploads".to_string(),
            max_size: 10 * 1024 * 1024,
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        // argon2 crate 的推荐默认值
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}
