//! 提交记录存储操作
//!
//! 文件内容由 blobstore 管理，这里只存 opaque 的文件路径；
//! 数据库行是提交存在与否的唯一事实来源。

use super::SeaOrmStorage;
use crate::entity::prelude::{SubmissionActiveModel, Submissions};
use crate::entity::submissions::Column;
use crate::errors::{EduSystemError, Result};
use crate::models::submissions::entities::Submission;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入提交记录
    pub async fn create_submission_impl(
        &self,
        student_id: i64,
        assignment_id: i64,
        submit_time: chrono::DateTime<chrono::Utc>,
        file_path: &str,
    ) -> Result<Submission> {
        let model = SubmissionActiveModel {
            student_id: Set(student_id),
            assignment_id: Set(assignment_id),
            submit_time: Set(submit_time.timestamp()),
            file_path: Set(file_path.to_string()),
            ..Default::default()
        };

        // 学生或作业不存在时外键约束经由 From<DbErr> 映射为 IntegrityViolation
        let result = model.insert(&self.db).await.map_err(EduSystemError::from)?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交记录
    pub async fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 某作业的全部提交
    pub async fn submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询作业提交失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 某学生的全部提交
    pub async fn submissions_by_student_impl(&self, student_id: i64) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生提交失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 全部提交记录
    pub async fn list_submissions_impl(&self) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 删除提交记录
    pub async fn delete_submission_impl(&self, submission_id: i64) -> Result<bool> {
        let result = Submissions::delete_by_id(submission_id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
