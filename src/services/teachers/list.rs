use super::TeacherService;
use crate::errors::Result;
use crate::models::classes::entities::Class;
use crate::models::teachers::entities::Teacher;

pub async fn list_teachers(
    service: &TeacherService,
    skip: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<Teacher>> {
    service.storage.list_teachers(skip, limit).await
}

pub async fn teacher_classes(service: &TeacherService, teacher_id: i64) -> Result<Vec<Class>> {
    service.storage.teacher_classes(teacher_id).await
}
