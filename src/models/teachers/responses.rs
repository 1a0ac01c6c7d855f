use serde::{Deserialize, Serialize};

use super::entities::Teacher;
use crate::models::users::entities::User;

// 教师档案及其背后的用户账号
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherProfile {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub user: User,
}
