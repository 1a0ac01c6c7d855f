use super::StudentService;
use crate::errors::Result;
use crate::models::students::entities::Student;

pub async fn list_students(
    service: &StudentService,
    skip: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<Student>> {
    service.storage.list_students(skip, limit).await
}
