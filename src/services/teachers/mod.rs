pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::Principal;
use crate::models::classes::entities::Class;
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
    responses::TeacherProfile,
};
use crate::storage::Storage;

pub struct TeacherService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 创建教师档案（连同背后的用户账号）
    pub async fn create_teacher(&self, request: CreateTeacherRequest) -> Result<TeacherProfile> {
        create::create_teacher(self, request).await
    }

    // 获取教师档案及其用户账号
    pub async fn get_teacher(&self, teacher_id: i64) -> Result<TeacherProfile> {
        get::get_teacher(self, teacher_id).await
    }

    // 列出教师
    pub async fn list_teachers(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Teacher>> {
        list::list_teachers(self, skip, limit).await
    }

    // 教师负责的班级
    pub async fn teacher_classes(&self, teacher_id: i64) -> Result<Vec<Class>> {
        list::teacher_classes(self, teacher_id).await
    }

    // 更新教师档案，只能更新自己的
    pub async fn update_teacher(
        &self,
        principal: &Principal,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Teacher> {
        update::update_teacher(self, principal, teacher_id, update).await
    }

    // 删除教师：级联清理其关联、作业、提交与用户账号
    pub async fn delete_teacher(&self, principal: &Principal, teacher_id: i64) -> Result<()> {
        delete::delete_teacher(self, principal, teacher_id).await
    }
}
