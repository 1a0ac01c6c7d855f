//! 运行时装配
//!
//! 嵌入方（HTTP 路由层）在启动时调用这里：初始化日志与配置，
//! 把存储、blob 存储、访问控制门和各领域服务组装成 `CoreContext`。

pub mod logging;
pub mod startup;

pub use startup::{CoreContext, prepare_core};
