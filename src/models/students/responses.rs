use serde::{Deserialize, Serialize};

use super::entities::Student;
use crate::models::users::entities::User;

// 学生档案及其背后的用户账号（显式合并，不做动态拼接）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(flatten)]
    pub student: Student,
    pub user: User,
}
