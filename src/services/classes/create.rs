use tracing::info;

use super::ClassService;
use crate::errors::Result;
use crate::models::classes::{entities::Class, requests::CreateClassRequest};

pub async fn create_class(service: &ClassService, request: CreateClassRequest) -> Result<Class> {
    let class = service.storage.create_class(request).await?;
    info!("班级 {} 创建成功 (ID: {})", class.class_name, class.id);
    Ok(class)
}
