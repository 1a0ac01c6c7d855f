//! 权限存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{
    PermissionActiveModel, Permissions, UserPermissionActiveModel, UserPermissions,
};
use crate::entity::user_permissions::Column as UserPermissionColumn;
use crate::errors::{EduSystemError, Result};
use crate::models::permissions::{entities::Permission, requests::CreatePermissionRequest};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建权限
    pub async fn create_permission_impl(&self, req: CreatePermissionRequest) -> Result<Permission> {
        let model = PermissionActiveModel {
            permission_name: Set(req.permission_name),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建权限失败: {e}")))?;

        Ok(result.into_permission())
    }

    /// 通过 ID 获取权限
    pub async fn get_permission_by_id_impl(&self, permission_id: i64) -> Result<Option<Permission>> {
        let result = Permissions::find_by_id(permission_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询权限失败: {e}")))?;

        Ok(result.map(|m| m.into_permission()))
    }

    /// 授予用户权限，已授予时返回 false
    pub async fn assign_permission_to_user_impl(
        &self,
        user_id: i64,
        permission_id: i64,
    ) -> Result<bool> {
        let model = UserPermissionActiveModel {
            user_id: Set(user_id),
            permission_id: Set(permission_id),
        };

        let result = UserPermissions::insert(model)
            .on_conflict(
                OnConflict::columns([
                    UserPermissionColumn::UserId,
                    UserPermissionColumn::PermissionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;

        // 冲突时语句命中 0 行（部分后端报 RecordNotInserted），都算"已授予"
        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// 用户拥有的权限
    pub async fn user_permissions_impl(&self, user_id: i64) -> Result<Vec<Permission>> {
        let result = UserPermissions::find()
            .filter(UserPermissionColumn::UserId.eq(user_id))
            .find_also_related(Permissions)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询用户权限失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|(_, permission)| permission.map(|m| m.into_permission()))
            .collect())
    }
}
