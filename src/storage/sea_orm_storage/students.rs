//! 学生档案存储操作
//!
//! 创建学生时会在同一事务内创建其背后的用户账号。

use super::SeaOrmStorage;
use crate::entity::prelude::{StudentActiveModel, Students, UserActiveModel, Users};
use crate::entity::students::Column;
use crate::errors::{EduSystemError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
    responses::StudentProfile,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生档案与背后的用户账号（单事务）
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<StudentProfile> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let user = UserActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            ..Default::default()
        };
        let user = user.insert(&txn).await.map_err(EduSystemError::from)?;

        let student = StudentActiveModel {
            grade_level: Set(req.grade_level),
            major: Set(req.major),
            user_id: Set(user.id),
            ..Default::default()
        };
        let student = student.insert(&txn).await.map_err(EduSystemError::from)?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(StudentProfile {
            student: student.into_student(),
            user: user.into_user(),
        })
    }

    /// 给已有用户挂学生档案（双角色用户走这里，不另建账号）
    pub async fn create_student_profile_impl(
        &self,
        user_id: i64,
        grade_level: &str,
        major: &str,
    ) -> Result<Student> {
        let student = StudentActiveModel {
            grade_level: Set(grade_level.to_string()),
            major: Set(major.to_string()),
            user_id: Set(user_id),
            ..Default::default()
        };

        // 用户不存在时外键约束经由 From<DbErr> 映射为 IntegrityViolation
        let student = student.insert(&self.db).await.map_err(EduSystemError::from)?;

        Ok(student.into_student())
    }

    /// 通过 ID 获取学生档案
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 ID 获取学生档案及用户账号
    pub async fn get_student_profile_impl(&self, student_id: i64) -> Result<Option<StudentProfile>> {
        let result = Students::find_by_id(student_id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some((student, Some(user))) => Ok(Some(StudentProfile {
                student: student.into_student(),
                user: user.into_user(),
            })),
            // 学生档案必然有用户账号，缺失视为数据不一致
            Some((student, None)) => Err(EduSystemError::integrity_violation(format!(
                "学生 {} 缺少用户账号",
                student.id
            ))),
            None => Ok(None),
        }
    }

    /// 通过用户 ID 获取学生档案（角色解析）
    pub async fn student_profile_of_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出学生
    pub async fn list_students_impl(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Student>> {
        let mut select = Students::find().order_by_asc(Column::Id);
        if let Some(skip) = skip {
            select = select.offset(skip);
        }
        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        let result = select
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生档案
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        if self.get_student_by_id_impl(student_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = StudentActiveModel {
            id: Set(student_id),
            ..Default::default()
        };

        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(grade_level);
        }

        if let Some(major) = update.major {
            model.major = Set(major);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(student_id).await
    }
}
