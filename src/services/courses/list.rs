use super::CourseService;
use crate::errors::Result;
use crate::models::courses::entities::Course;

pub async fn list_courses(
    service: &CourseService,
    skip: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<Course>> {
    service.storage.list_courses(skip, limit).await
}

pub async fn student_courses(service: &CourseService, student_id: i64) -> Result<Vec<Course>> {
    service.storage.student_courses(student_id).await
}
