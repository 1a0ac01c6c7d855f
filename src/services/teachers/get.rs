use super::TeacherService;
use crate::errors::{EduSystemError, Result};
use crate::models::teachers::responses::TeacherProfile;

pub async fn get_teacher(service: &TeacherService, teacher_id: i64) -> Result<TeacherProfile> {
    service
        .storage
        .get_teacher_profile(teacher_id)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Teacher {teacher_id} not found")))
}
