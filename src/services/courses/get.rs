use super::CourseService;
use crate::errors::{EduSystemError, Result};
use crate::models::courses::entities::Course;

pub async fn get_course(service: &CourseService, course_id: i64) -> Result<Course> {
    service
        .storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Course {course_id} not found")))
}
