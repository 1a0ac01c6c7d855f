//! 提交工作流：截止时间、所有权与文件/记录一致性

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use common::{TestCore, seed_student, seed_teacher, student_principal, teacher_principal};
use rust_edusystem_core::blobstore::BlobStore;
use rust_edusystem_core::errors::{EduSystemError, Result};
use rust_edusystem_core::models::assignments::entities::Assignment;
use rust_edusystem_core::models::assignments::requests::CreateAssignmentRequest;
use rust_edusystem_core::models::auth::entities::Principal;
use rust_edusystem_core::models::submissions::requests::SubmitAssignmentRequest;

async fn seed_assignment(core: &TestCore, principal: &Principal, days: i64) -> Assignment {
    core.ctx
        .assignments
        .create_assignment(
            principal,
            CreateAssignmentRequest {
                content: "Homework".to_string(),
                deadline: Utc::now() + Duration::days(days),
                status: "open".to_string(),
            },
        )
        .await
        .expect("failed to seed assignment")
}

fn pdf_request(content: &[u8]) -> SubmitAssignmentRequest {
    SubmitAssignmentRequest {
        file_name: "answers.pdf".to_string(),
        content: content.to_vec(),
    }
}

#[tokio::test]
async fn submit_then_download_round_trip() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    let assignment = seed_assignment(&core, &teacher_principal(&teacher), 7).await;

    let principal = student_principal(&student);
    let submission = core
        .ctx
        .submissions
        .submit(&principal, assignment.id, pdf_request(b"my answers"))
        .await
        .unwrap();
    assert_eq!(submission.student_id, student.student.id);
    assert_eq!(core.blob_count(), 1);

    let file = core
        .ctx
        .submissions
        .download(&principal, submission.id)
        .await
        .unwrap();
    assert_eq!(file.content, b"my answers");
    assert_eq!(file.submission.id, submission.id);

    let mine = core.ctx.submissions.my_submissions(&principal).await.unwrap();
    assert_eq!(mine.len(), 1);
}

#[tokio::test]
async fn late_submit_is_rejected_without_traces() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    // 截止时间在过去
    let assignment = seed_assignment(&core, &teacher_principal(&teacher), -1).await;

    let principal = student_principal(&student);
    let result = core
        .ctx
        .submissions
        .submit(&principal, assignment.id, pdf_request(b"too late"))
        .await;
    assert!(matches!(result, Err(EduSystemError::DeadlinePassed(_))));

    // 既没有记录也没有文件
    let mine = core.ctx.submissions.my_submissions(&principal).await.unwrap();
    assert!(mine.is_empty());
    assert_eq!(core.blob_count(), 0);
}

#[tokio::test]
async fn ownership_rules_for_download_and_delete() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let alice = seed_student(&core, "alice").await;
    let bob = seed_student(&core, "bob").await;
    let assignment = seed_assignment(&core, &teacher_principal(&teacher), 7).await;

    let submission = core
        .ctx
        .submissions
        .submit(&student_principal(&alice), assignment.id, pdf_request(b"alice"))
        .await
        .unwrap();

    // 别的学生既不能下载也不能删除
    let bob_principal = student_principal(&bob);
    assert!(matches!(
        core.ctx.submissions.download(&bob_principal, submission.id).await,
        Err(EduSystemError::Forbidden(_))
    ));
    assert!(matches!(
        core.ctx.submissions.delete(&bob_principal, submission.id).await,
        Err(EduSystemError::Forbidden(_))
    ));

    // 教师不受所有权限制
    let file = core
        .ctx
        .submissions
        .download(&teacher_principal(&teacher), submission.id)
        .await
        .unwrap();
    assert_eq!(file.content, b"alice");
}

#[tokio::test]
async fn owner_delete_removes_row_and_file() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    let assignment = seed_assignment(&core, &teacher_principal(&teacher), 7).await;

    let principal = student_principal(&student);
    let submission = core
        .ctx
        .submissions
        .submit(&principal, assignment.id, pdf_request(b"draft"))
        .await
        .unwrap();
    assert_eq!(core.blob_count(), 1);

    core.ctx
        .submissions
        .delete(&principal, submission.id)
        .await
        .unwrap();

    assert_eq!(core.blob_count(), 0);
    assert!(matches!(
        core.ctx.submissions.download(&principal, submission.id).await,
        Err(EduSystemError::NotFound(_))
    ));
}

/// 内存 blob 存储，删除永远失败（故障注入用）
struct StickyBlobStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl BlobStore for StickyBlobStore {
    async fn store(&self, bytes: &[u8], _original_filename: &str) -> Result<String> {
        let name = uuid::Uuid::new_v4().to_string();
        self.files
            .lock()
            .unwrap()
            .insert(name.clone(), bytes.to_vec());
        Ok(name)
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| EduSystemError::not_found(format!("blob {path} not found")))
    }

    async fn remove(&self, _path: &str) -> Result<bool> {
        Err(EduSystemError::storage("simulated removal failure"))
    }
}

#[tokio::test]
async fn delete_keeps_row_when_file_removal_fails() {
    let core = TestCore::with_blobstore(Arc::new(StickyBlobStore {
        files: Mutex::new(HashMap::new()),
    }))
    .await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    let assignment = seed_assignment(&core, &teacher_principal(&teacher), 7).await;

    let principal = student_principal(&student);
    let submission = core
        .ctx
        .submissions
        .submit(&principal, assignment.id, pdf_request(b"stuck"))
        .await
        .unwrap();

    let result = core.ctx.submissions.delete(&principal, submission.id).await;
    assert!(matches!(result, Err(EduSystemError::Storage(_))));

    // 文件没删成，记录必须原样保留
    let file = core
        .ctx
        .submissions
        .download(&principal, submission.id)
        .await
        .unwrap();
    assert_eq!(file.content, b"stuck");
}

#[tokio::test]
async fn failed_insert_cleans_up_stored_file() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let assignment = seed_assignment(&core, &teacher_principal(&teacher), 7).await;

    // 指向不存在学生的主体：记录写入触碰外键约束
    let ghost = Principal {
        user_id: 9999,
        username: "ghost".to_string(),
        email: "ghost@example.com".to_string(),
        student_id: Some(9999),
        teacher_id: None,
    };

    let result = core
        .ctx
        .submissions
        .submit(&ghost, assignment.id, pdf_request(b"orphan"))
        .await;
    assert!(matches!(result, Err(EduSystemError::IntegrityViolation(_))));

    // 已存的文件被补偿清理
    assert_eq!(core.blob_count(), 0);
}
