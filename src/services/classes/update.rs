use super::ClassService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_teacher;
use crate::models::auth::entities::Principal;
use crate::models::classes::{entities::Class, requests::UpdateClassRequest};

pub async fn update_class(
    service: &ClassService,
    principal: &Principal,
    class_id: i64,
    update: UpdateClassRequest,
) -> Result<Class> {
    require_teacher(principal)?;

    service
        .storage
        .update_class(class_id, update)
        .await?
        .ok_or_else(|| EduSystemError::not_found(format!("Class {class_id} not found")))
}
