use std::sync::Arc;

use tracing::{debug, info};

use crate::blobstore::{BlobStore, LocalBlobStore};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::gate::AccessGate;
use crate::services::{
    AssignmentService, AuthService, ClassMemberService, ClassService, CourseService, GradeService,
    PermissionService, StudentService, SubmissionService, TeacherService,
};
use crate::storage::Storage;

/// 核心上下文：嵌入方持有它来访问全部操作
pub struct CoreContext {
    pub storage: Arc<dyn Storage>,
    pub blobstore: Arc<dyn BlobStore>,
    pub gate: AccessGate,
    pub auth: AuthService,
    pub students: StudentService,
    pub teachers: TeacherService,
    pub classes: ClassService,
    pub class_members: ClassMemberService,
    pub courses: CourseService,
    pub grades: GradeService,
    pub assignments: AssignmentService,
    pub submissions: SubmissionService,
    pub permissions: PermissionService,
}

impl CoreContext {
    /// 从已有的存储与 blob 存储组装（测试与嵌入方使用）
    pub fn assemble(storage: Arc<dyn Storage>, blobstore: Arc<dyn BlobStore>) -> Self {
        Self {
            gate: AccessGate::new(storage.clone()),
            auth: AuthService::new(storage.clone()),
            students: StudentService::new(storage.clone()),
            teachers: TeacherService::new(storage.clone()),
            classes: ClassService::new(storage.clone()),
            class_members: ClassMemberService::new(storage.clone()),
            courses: CourseService::new(storage.clone()),
            grades: GradeService::new(storage.clone()),
            assignments: AssignmentService::new(storage.clone()),
            submissions: SubmissionService::new(storage.clone(), blobstore.clone()),
            permissions: PermissionService::new(storage.clone()),
            storage,
            blobstore,
        }
    }
}

/// 按全局配置完成启动装配
///
/// dotenv → 配置 → 存储（建表迁移随连接执行）→ blob 存储 → 服务。
/// 日志初始化由嵌入方另行调用 `logging::init_tracing`。
pub async fn prepare_core() -> Result<CoreContext> {
    dotenv::dotenv().ok();

    let config = AppConfig::get();
    debug!(
        "启动装配开始，环境: {}, 数据库: {}",
        config.app.environment, config.database.url
    );

    let storage = crate::storage::create_storage().await?;
    let blobstore: Arc<dyn BlobStore> = Arc::new(LocalBlobStore::new_async().await?);

    info!("{} 核心装配完成", config.app.system_name);

    Ok(CoreContext::assemble(storage, blobstore))
}
