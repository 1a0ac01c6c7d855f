pub mod create;
pub mod enroll;
pub mod get;
pub mod list;
pub mod students;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::Principal;
use crate::models::courses::{
    entities::Course, requests::CreateCourseRequest, responses::CourseStudent,
};
use crate::storage::Storage;

pub struct CourseService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 创建课程并关联授课教师，仅限教师
    pub async fn create_course(
        &self,
        principal: &Principal,
        request: CreateCourseRequest,
    ) -> Result<Course> {
        create::create_course(self, principal, request).await
    }

    // 获取课程信息
    pub async fn get_course(&self, course_id: i64) -> Result<Course> {
        get::get_course(self, course_id).await
    }

    // 列出课程
    pub async fn list_courses(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Course>> {
        list::list_courses(self, skip, limit).await
    }

    // 学生选课，只能为自己选；已选时返回 false
    pub async fn enroll(&self, principal: &Principal, course_id: i64) -> Result<bool> {
        enroll::enroll(self, principal, course_id).await
    }

    // 学生已选课程
    pub async fn student_courses(&self, student_id: i64) -> Result<Vec<Course>> {
        list::student_courses(self, student_id).await
    }

    // 课程学生名单（附成绩），仅限教师
    pub async fn course_students(
        &self,
        principal: &Principal,
        course_id: i64,
    ) -> Result<Vec<CourseStudent>> {
        students::course_students(self, principal, course_id).await
    }
}
