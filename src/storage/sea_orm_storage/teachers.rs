//! 教师档案存储操作
//!
//! 删除教师是固定顺序的级联：关联表 → 提交 → 作业 → 教师 → 用户账号，
//! 全部在单个事务内执行，满足外键约束。

use super::SeaOrmStorage;
use crate::entity::prelude::{
    Assignments, Students, Submissions, TeacherActiveModel, TeacherClasses, TeacherCourses,
    Teachers, UserActiveModel, Users,
};
use crate::entity::{
    assignments::Column as AssignmentColumn, students::Column as StudentColumn,
    submissions::Column as SubmissionColumn, teacher_classes::Column as TeacherClassColumn,
    teacher_courses::Column as TeacherCourseColumn, teachers::Column,
};
use crate::errors::{EduSystemError, Result};
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
    responses::TeacherProfile,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::info;

impl SeaOrmStorage {
    /// 创建教师档案与背后的用户账号（单事务）
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<TeacherProfile> {
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

        let teacher = TeacherActiveModel {
            title: Set(req.title),
            department: Set(req.department),
            user_id: Set(user.id),
            ..Default::default()
        };
        let teacher = teacher.insert(&txn).await.map_err(EduSystemError::from)?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(TeacherProfile {
            teacher: teacher.into_teacher(),
            user: user.into_user(),
        })
    }

    /// 通过 ID 获取教师档案
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过 ID 获取教师档案及用户账号
    pub async fn get_teacher_profile_impl(&self, teacher_id: i64) -> Result<Option<TeacherProfile>> {
        let result = Teachers::find_by_id(teacher_id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some((teacher, Some(user))) => Ok(Some(TeacherProfile {
                teacher: teacher.into_teacher(),
                user: user.into_user(),
            })),
            Some((teacher, None)) => Err(EduSystemError::integrity_violation(format!(
                "教师 {} 缺少用户账号",
                teacher.id
            ))),
            None => Ok(None),
        }
    }

    /// 通过用户 ID 获取教师档案（角色解析）
    pub async fn teacher_profile_of_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 列出教师
    pub async fn list_teachers_impl(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Teacher>> {
        let mut select = Teachers::find().order_by_asc(Column::Id);
        if let Some(skip) = skip {
            select = select.offset(skip);
        }
        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        let result = select
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 更新教师档案
    pub async fn update_teacher_impl(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id_impl(teacher_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = TeacherActiveModel {
            id: Set(teacher_id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(teacher_id).await
    }

    /// 删除教师及其全部关联数据（单事务级联）
    ///
    /// 顺序：班级/课程关联 → 所属作业的提交 → 作业 → 教师 → 用户账号。
    /// 用户同时持有学生档案时保留用户账号，避免误删双角色用户。
    pub async fn delete_teacher_impl(&self, teacher_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(teacher) = Teachers::find_by_id(teacher_id)
            .one(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?
        else {
            return Ok(false);
        };

        // 班级与课程关联
        TeacherClasses::delete_many()
            .filter(TeacherClassColumn::TeacherId.eq(teacher_id))
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除班级关联失败: {e}")))?;

        TeacherCourses::delete_many()
            .filter(TeacherCourseColumn::TeacherId.eq(teacher_id))
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除课程关联失败: {e}")))?;

        // 所属作业的提交，先于作业删除
        let assignment_ids: Vec<i64> = Assignments::find()
            .select_only()
            .column(AssignmentColumn::Id)
            .filter(AssignmentColumn::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询作业失败: {e}")))?;

        if !assignment_ids.is_empty() {
            Submissions::delete_many()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids.clone()))
                .exec(&txn)
                .await
                .map_err(|e| EduSystemError::database_operation(format!("删除提交失败: {e}")))?;

            Assignments::delete_many()
                .filter(AssignmentColumn::TeacherId.eq(teacher_id))
                .exec(&txn)
                .await
                .map_err(|e| EduSystemError::database_operation(format!("删除作业失败: {e}")))?;
        }

        Teachers::delete_by_id(teacher_id)
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除教师失败: {e}")))?;

        // 双角色守卫：用户还持有学生档案时保留账号
        let has_student_profile = Students::find()
            .filter(StudentColumn::UserId.eq(teacher.user_id))
            .one(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生档案失败: {e}")))?
            .is_some();

        if has_student_profile {
            info!(
                "用户 {} 仍持有学生档案，保留用户账号",
                teacher.user_id
            );
        } else {
            let user = UserActiveModel {
                id: Set(teacher.user_id),
                ..Default::default()
            };
            user.delete(&txn)
                .await
                .map_err(|e| EduSystemError::database_operation(format!("删除用户失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        info!("教师 {} 及其关联数据已级联删除", teacher_id);
        Ok(true)
    }
}
