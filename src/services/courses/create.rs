use tracing::info;

use super::CourseService;
use crate::errors::Result;
use crate::gate::require_teacher;
use crate::models::auth::entities::Principal;
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};

pub async fn create_course(
    service: &CourseService,
    principal: &Principal,
    request: CreateCourseRequest,
) -> Result<Course> {
    let teacher_id = require_teacher(principal)?;

    // 创建即授课：课程与授课关联在存储层同一事务内写入
    let course = service.storage.create_course(teacher_id, request).await?;

    info!(
        "课程 {} 创建成功 (ID: {})，授课教师 {}",
        course.course_name, course.id, teacher_id
    );
    Ok(course)
}
