//! 班级与班级成员存储操作
//!
//! 成员关系表以 (student_id, class_id) 复合主键兜底唯一性，
//! 插入使用单条带冲突处理的语句，并发重复加入只会成功一次。

use super::SeaOrmStorage;
use crate::entity::prelude::{
    ClassActiveModel, Classes, StudentClassActiveModel, StudentClasses, Students, TeacherClasses,
};
use crate::entity::{
    student_classes::Column as StudentClassColumn, teacher_classes::Column as TeacherClassColumn,
};
use crate::errors::{EduSystemError, Result};
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use crate::models::students::entities::Student;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::info;

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ClassActiveModel {
            class_name: Set(req.class_name),
            grade_level: Set(req.grade_level),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        if self.get_class_by_id_impl(class_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ClassActiveModel {
            id: Set(class_id),
            ..Default::default()
        };

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }

        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(grade_level);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级及其成员关联（单事务级联）
    ///
    /// 顺序：学生成员关联 → 教师成员关联 → 班级本身。
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        if Classes::find_by_id(class_id)
            .one(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询班级失败: {e}")))?
            .is_none()
        {
            return Ok(false);
        }

        StudentClasses::delete_many()
            .filter(StudentClassColumn::ClassId.eq(class_id))
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除学生关联失败: {e}")))?;

        TeacherClasses::delete_many()
            .filter(TeacherClassColumn::ClassId.eq(class_id))
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除教师关联失败: {e}")))?;

        Classes::delete_by_id(class_id)
            .exec(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除班级失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        info!("班级 {} 及其成员关联已级联删除", class_id);
        Ok(true)
    }

    /// 学生加入班级，已是成员时返回 false
    pub async fn add_student_to_class_impl(&self, student_id: i64, class_id: i64) -> Result<bool> {
        let model = StudentClassActiveModel {
            student_id: Set(student_id),
            class_id: Set(class_id),
        };

        let result = StudentClasses::insert(model)
            .on_conflict(
                OnConflict::columns([StudentClassColumn::StudentId, StudentClassColumn::ClassId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;

        // 冲突时语句命中 0 行（部分后端报 RecordNotInserted），都算"已是成员"
        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// 学生退出班级，无成员关系时返回 false
    pub async fn remove_student_from_class_impl(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<bool> {
        let result = StudentClasses::delete_many()
            .filter(StudentClassColumn::StudentId.eq(student_id))
            .filter(StudentClassColumn::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("移除班级成员失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 班级学生名单
    pub async fn class_students_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let result = StudentClasses::find()
            .filter(StudentClassColumn::ClassId.eq(class_id))
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询班级名单失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|(_, student)| student.map(|m| m.into_student()))
            .collect())
    }

    /// 学生所在的班级
    pub async fn student_classes_impl(&self, student_id: i64) -> Result<Vec<Class>> {
        let result = StudentClasses::find()
            .filter(StudentClassColumn::StudentId.eq(student_id))
            .find_also_related(Classes)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生班级失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|(_, class)| class.map(|m| m.into_class()))
            .collect())
    }

    /// 教师负责的班级
    pub async fn teacher_classes_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let result = TeacherClasses::find()
            .filter(TeacherClassColumn::TeacherId.eq(teacher_id))
            .find_also_related(Classes)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师班级失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|(_, class)| class.map(|m| m.into_class()))
            .collect())
    }
}
