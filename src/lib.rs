//! EduSystem Core - 教务系统授权与关系管理核心
//!
//! 基于 SeaORM 的教务记录核心库：身份、角色、选课/班级/权限关联账本
//! 与作业提交工作流。不含 HTTP 层，由外部路由层嵌入使用。
//!
//! # 架构
//! - `blobstore`: 提交文件存储（本地文件系统实现）
//! - `cache`: 主体解析缓存（Moka）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `gate`: 访问控制门（令牌 → 主体 → 角色/所有权检查）
//! - `models`: 数据模型定义
//! - `runtime`: 启动装配与日志初始化
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod blobstore;
pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod gate;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
