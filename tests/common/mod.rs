//! 集成测试公共设施
//!
//! 每个测试用独立的内存 SQLite（迁移随连接执行）和独立的临时
//! 上传目录，互不干扰。

use std::path::PathBuf;
use std::sync::Arc;

use rust_edusystem_core::blobstore::{BlobStore, LocalBlobStore};
use rust_edusystem_core::models::auth::entities::Principal;
use rust_edusystem_core::models::students::{
    requests::CreateStudentRequest, responses::StudentProfile,
};
use rust_edusystem_core::models::teachers::{
    requests::CreateTeacherRequest, responses::TeacherProfile,
};
use rust_edusystem_core::runtime::CoreContext;
use rust_edusystem_core::storage::create_storage_with_url;

pub struct TestCore {
    pub ctx: CoreContext,
    pub blob_dir: PathBuf,
}

impl TestCore {
    /// 内存数据库 + 临时上传目录的核心实例
    pub async fn new() -> Self {
        let blob_dir =
            std::env::temp_dir().join(format!("edusystem-test-{}", uuid::Uuid::new_v4()));

        let storage = create_storage_with_url(":memory:")
            .await
            .expect("failed to create in-memory test storage");
        let blobstore: Arc<dyn BlobStore> = Arc::new(
            LocalBlobStore::new_with_dir(&blob_dir, 10 * 1024 * 1024)
                .await
                .expect("failed to create test blob store"),
        );

        Self {
            ctx: CoreContext::assemble(storage, blobstore),
            blob_dir,
        }
    }

    /// 用自定义 blob 存储组装（注入故障实现用）
    pub async fn with_blobstore(blobstore: Arc<dyn BlobStore>) -> Self {
        let storage = create_storage_with_url(":memory:")
            .await
            .expect("failed to create in-memory test storage");

        Self {
            ctx: CoreContext::assemble(storage, blobstore),
            blob_dir: PathBuf::new(),
        }
    }

    /// 上传目录里的文件数
    pub fn blob_count(&self) -> usize {
        std::fs::read_dir(&self.blob_dir)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// 建一个教师账号（用户名同时用作邮箱前缀）
pub async fn seed_teacher(core: &TestCore, username: &str) -> TeacherProfile {
    core.ctx
        .teachers
        .create_teacher(CreateTeacherRequest {
            username: username.to_string(),
            password: "SecurePass123".to_string(),
            email: format!("{username}@example.com"),
            title: "Professor".to_string(),
            department: "Computer Science".to_string(),
        })
        .await
        .expect("failed to seed teacher")
}

/// 建一个学生账号
pub async fn seed_student(core: &TestCore, username: &str) -> StudentProfile {
    core.ctx
        .students
        .create_student(CreateStudentRequest {
            username: username.to_string(),
            password: "SecurePass123".to_string(),
            email: format!("{username}@example.com"),
            grade_level: "2026".to_string(),
            major: "Software Engineering".to_string(),
        })
        .await
        .expect("failed to seed student")
}

pub fn teacher_principal(profile: &TeacherProfile) -> Principal {
    Principal {
        user_id: profile.user.id,
        username: profile.user.username.clone(),
        email: profile.user.email.clone(),
        student_id: None,
        teacher_id: Some(profile.teacher.id),
    }
}

pub fn student_principal(profile: &StudentProfile) -> Principal {
    Principal {
        user_id: profile.user.id,
        username: profile.user.username.clone(),
        email: profile.user.email.clone(),
        student_id: Some(profile.student.id),
        teacher_id: None,
    }
}
