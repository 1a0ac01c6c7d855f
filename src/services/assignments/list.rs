use super::AssignmentService;
use crate::errors::{EduSystemError, Result};
use crate::models::assignments::entities::Assignment;

pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<Assignment> {
    service
        .storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Assignment {assignment_id} not found")))
}

pub async fn list_assignments(service: &AssignmentService) -> Result<Vec<Assignment>> {
    service.storage.list_assignments().await
}

pub async fn assignments_by_course(
    service: &AssignmentService,
    course_id: i64,
) -> Result<Vec<Assignment>> {
    if service.storage.get_course_by_id(course_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Course {course_id} not found"
        )));
    }

    service.storage.assignments_by_course(course_id).await
}
