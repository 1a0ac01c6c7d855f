use super::CourseService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_teacher;
use crate::models::auth::entities::Principal;
use crate::models::courses::responses::CourseStudent;

pub async fn course_students(
    service: &CourseService,
    principal: &Principal,
    course_id: i64,
) -> Result<Vec<CourseStudent>> {
    require_teacher(principal)?;

    if service.storage.get_course_by_id(course_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Course {course_id} not found"
        )));
    }

    service.storage.course_students(course_id).await
}
