pub mod create;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::models::auth::entities::Principal;
use crate::storage::Storage;

pub struct AssignmentService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 布置作业，归属操作教师本人
    pub async fn create_assignment(
        &self,
        principal: &Principal,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, principal, request).await
    }

    // 获取作业
    pub async fn get_assignment(&self, assignment_id: i64) -> Result<Assignment> {
        list::get_assignment(self, assignment_id).await
    }

    // 列出全部作业
    pub async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        list::list_assignments(self).await
    }

    // 列出课程相关作业（经由授课教师的课程关联）
    pub async fn assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>> {
        list::assignments_by_course(self, course_id).await
    }
}
