use serde::{Deserialize, Serialize};

// 认证主体：令牌解析后的调用者身份与角色集合
//
// student_id / teacher_id 随主体一并携带，所有权判断无需再查库。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

impl Principal {
    pub fn is_student(&self) -> bool {
        self.student_id.is_some()
    }

    pub fn is_teacher(&self) -> bool {
        self.teacher_id.is_some()
    }
}
