use super::ClassService;
use crate::errors::{EduSystemError, Result};
use crate::models::classes::entities::Class;

pub async fn get_class(service: &ClassService, class_id: i64) -> Result<Class> {
    service
        .storage
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Class {class_id} not found")))
}
