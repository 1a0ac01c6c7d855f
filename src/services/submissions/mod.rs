//! 作业提交工作流
//!
//! 提交状态机：absent → submitted → {downloaded, deleted}。
//! 文件内容走 blob 存储，数据库行是提交存在与否的唯一事实来源；
//! 两者之间没有事务关联，由提交/删除操作里的补偿规则保证一致。

pub mod delete;
pub mod download;
pub mod list;
pub mod submit;

use std::sync::Arc;

use crate::blobstore::BlobStore;
use crate::errors::Result;
use crate::models::auth::entities::Principal;
use crate::models::submissions::{
    entities::Submission, requests::SubmitAssignmentRequest, responses::SubmissionFile,
};
use crate::storage::Storage;

pub struct SubmissionService {
    pub(crate) storage: Arc<dyn Storage>,
    pub(crate) blobstore: Arc<dyn BlobStore>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>, blobstore: Arc<dyn BlobStore>) -> Self {
        Self { storage, blobstore }
    }

    // 提交作业，仅限学生本人；截止后拒绝
    pub async fn submit(
        &self,
        principal: &Principal,
        assignment_id: i64,
        request: SubmitAssignmentRequest,
    ) -> Result<Submission> {
        submit::submit(self, principal, assignment_id, request).await
    }

    // 下载提交：学生只能下载自己的，教师不受限
    pub async fn download(
        &self,
        principal: &Principal,
        submission_id: i64,
    ) -> Result<SubmissionFile> {
        download::download(self, principal, submission_id).await
    }

    // 删除提交：所有权规则同下载；先删文件再删记录
    pub async fn delete(&self, principal: &Principal, submission_id: i64) -> Result<()> {
        delete::delete(self, principal, submission_id).await
    }

    // 学生本人的全部提交
    pub async fn my_submissions(&self, principal: &Principal) -> Result<Vec<Submission>> {
        list::my_submissions(self, principal).await
    }

    // 某作业的全部提交，仅限教师
    pub async fn submissions_by_assignment(
        &self,
        principal: &Principal,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        list::submissions_by_assignment(self, principal, assignment_id).await
    }

    // 全部提交记录，仅限教师
    pub async fn list_submissions(&self, principal: &Principal) -> Result<Vec<Submission>> {
        list::list_submissions(self, principal).await
    }
}

/// 所有权规则：教师可访问任意提交，学生只能访问自己的
pub(crate) fn check_submission_access(principal: &Principal, owner_student_id: i64) -> Result<()> {
    use crate::errors::EduSystemError;

    if principal.is_teacher() {
        return Ok(());
    }

    match principal.student_id {
        Some(student_id) if student_id == owner_student_id => Ok(()),
        Some(_) => Err(EduSystemError::forbidden(
            "You may only access your own submissions",
        )),
        None => Err(EduSystemError::forbidden(
            "This operation requires a student or teacher role",
        )),
    }
}
