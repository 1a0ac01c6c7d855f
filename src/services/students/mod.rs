pub mod create;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
    responses::StudentProfile,
};
use crate::storage::Storage;

pub struct StudentService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 创建学生档案（连同背后的用户账号）
    pub async fn create_student(&self, request: CreateStudentRequest) -> Result<StudentProfile> {
        create::create_student(self, request).await
    }

    // 获取学生档案及其用户账号
    pub async fn get_student(&self, student_id: i64) -> Result<StudentProfile> {
        get::get_student(self, student_id).await
    }

    // 列出学生
    pub async fn list_students(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Student>> {
        list::list_students(self, skip, limit).await
    }

    // 更新学生档案
    pub async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Student> {
        update::update_student(self, student_id, update).await
    }
}
