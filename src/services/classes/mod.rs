pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::Principal;
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use crate::storage::Storage;

pub struct ClassService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 创建班级
    pub async fn create_class(&self, request: CreateClassRequest) -> Result<Class> {
        create::create_class(self, request).await
    }

    // 获取班级信息
    pub async fn get_class(&self, class_id: i64) -> Result<Class> {
        get::get_class(self, class_id).await
    }

    // 更新班级信息，仅限教师
    pub async fn update_class(
        &self,
        principal: &Principal,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Class> {
        update::update_class(self, principal, class_id, update).await
    }

    // 删除班级：级联清理成员关联，仅限教师
    pub async fn delete_class(&self, principal: &Principal, class_id: i64) -> Result<()> {
        delete::delete_class(self, principal, class_id).await
    }
}
