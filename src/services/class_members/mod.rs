pub mod join;
pub mod leave;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::Principal;
use crate::models::classes::entities::Class;
use crate::models::students::entities::Student;
use crate::storage::Storage;

pub struct ClassMemberService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl ClassMemberService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 学生加入班级；已是成员时返回 false
    pub async fn add_student(&self, student_id: i64, class_id: i64) -> Result<bool> {
        join::add_student(self, student_id, class_id).await
    }

    // 将学生移出班级，仅限教师；无成员关系时返回 false
    pub async fn remove_student(
        &self,
        principal: &Principal,
        student_id: i64,
        class_id: i64,
    ) -> Result<bool> {
        leave::remove_student(self, principal, student_id, class_id).await
    }

    // 班级学生名单
    pub async fn class_students(&self, class_id: i64) -> Result<Vec<Student>> {
        list::class_students(self, class_id).await
    }

    // 学生所在的班级
    pub async fn student_classes(&self, student_id: i64) -> Result<Vec<Class>> {
        list::student_classes(self, student_id).await
    }
}
