use super::StudentService;
use crate::errors::{EduSystemError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update: UpdateStudentRequest,
) -> Result<Student> {
    service
        .storage
        .update_student(student_id, update)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Student {student_id} not found")))
}
