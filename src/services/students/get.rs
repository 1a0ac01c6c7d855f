use super::StudentService;
use crate::errors::{EduSystemError, Result};
use crate::models::students::responses::StudentProfile;

pub async fn get_student(service: &StudentService, student_id: i64) -> Result<StudentProfile> {
    service
        .storage
        .get_student_profile(student_id)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Student {student_id} not found")))
}
