use super::ClassMemberService;
use crate::errors::Result;
use crate::models::classes::entities::Class;
use crate::models::students::entities::Student;

pub async fn class_students(service: &ClassMemberService, class_id: i64) -> Result<Vec<Student>> {
    service.storage.class_students(class_id).await
}

pub async fn student_classes(
    service: &ClassMemberService,
    student_id: i64,
) -> Result<Vec<Class>> {
    service.storage.student_classes(student_id).await
}
