//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{AssignmentActiveModel, Assignments, TeacherCourses};
use crate::entity::{
    assignments::Column, teacher_courses::Column as TeacherCourseColumn,
};
use crate::errors::{EduSystemError, Result};
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

impl SeaOrmStorage {
    /// 布置作业，归属指定教师
    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let model = AssignmentActiveModel {
            content: Set(req.content),
            deadline: Set(req.deadline.timestamp()),
            status: Set(req.status),
            teacher_id: Set(teacher_id),
            ..Default::default()
        };

        // 教师不存在时外键约束经由 From<DbErr> 映射为 IntegrityViolation
        let result = model.insert(&self.db).await.map_err(EduSystemError::from)?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出全部作业
    pub async fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        let result = Assignments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 列出课程相关作业
    ///
    /// 作业不直接挂在课程上，经由授课教师的课程关联解析：
    /// 返回所有授课教师名下的作业。
    pub async fn assignments_by_course_impl(&self, course_id: i64) -> Result<Vec<Assignment>> {
        let teacher_ids: Vec<i64> = TeacherCourses::find()
            .select_only()
            .column(TeacherCourseColumn::TeacherId)
            .filter(TeacherCourseColumn::CourseId.eq(course_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询授课教师失败: {e}")))?;

        if teacher_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Assignments::find()
            .filter(Column::TeacherId.is_in(teacher_ids))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询课程作业失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }
}
