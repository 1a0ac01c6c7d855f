//! 业务模型定义
//!
//! 与 entity 模块的数据库模型分离：存储层负责二者之间的转换，
//! 服务层和调用方只接触这里的类型。

pub mod assignments;
pub mod auth;
pub mod classes;
pub mod courses;
pub mod enrollments;
pub mod permissions;
pub mod students;
pub mod submissions;
pub mod teachers;
pub mod users;
