//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 所有级联与"检查并写入"操作都在单个事务内完成。

mod assignments;
mod classes;
mod courses;
mod permissions;
mod students;
mod submissions;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{EduSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(&config.database.url).await
    }

    /// 用指定数据库 URL 创建存储实例
    pub async fn new_with_url(url: &str) -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 内存库只允许单连接，多连接会各自得到一个独立的空库
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let max_connections = if in_memory {
            1
        } else {
            config.database.pool_size
        };

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EduSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EduSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    courses::{entities::Course, requests::CreateCourseRequest, responses::CourseStudent},
    enrollments::entities::TranscriptEntry,
    permissions::{entities::Permission, requests::CreatePermissionRequest},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
        responses::StudentProfile,
    },
    submissions::entities::Submission,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
        responses::TeacherProfile,
    },
    users::{entities::User, requests::RegisterUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: RegisterUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<StudentProfile> {
        self.create_student_impl(student).await
    }

    async fn create_student_profile(
        &self,
        user_id: i64,
        grade_level: &str,
        major: &str,
    ) -> Result<Student> {
        self.create_student_profile_impl(user_id, grade_level, major)
            .await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn get_student_profile(&self, student_id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_profile_impl(student_id).await
    }

    async fn student_profile_of(&self, user_id: i64) -> Result<Option<Student>> {
        self.student_profile_of_impl(user_id).await
    }

    async fn list_students(&self, skip: Option<u64>, limit: Option<u64>) -> Result<Vec<Student>> {
        self.list_students_impl(skip, limit).await
    }

    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, update).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<TeacherProfile> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(teacher_id).await
    }

    async fn get_teacher_profile(&self, teacher_id: i64) -> Result<Option<TeacherProfile>> {
        self.get_teacher_profile_impl(teacher_id).await
    }

    async fn teacher_profile_of(&self, user_id: i64) -> Result<Option<Teacher>> {
        self.teacher_profile_of_impl(user_id).await
    }

    async fn list_teachers(&self, skip: Option<u64>, limit: Option<u64>) -> Result<Vec<Teacher>> {
        self.list_teachers_impl(skip, limit).await
    }

    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(teacher_id, update).await
    }

    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool> {
        self.delete_teacher_impl(teacher_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    async fn add_student_to_class(&self, student_id: i64, class_id: i64) -> Result<bool> {
        self.add_student_to_class_impl(student_id, class_id).await
    }

    async fn remove_student_from_class(&self, student_id: i64, class_id: i64) -> Result<bool> {
        self.remove_student_from_class_impl(student_id, class_id)
            .await
    }

    async fn class_students(&self, class_id: i64) -> Result<Vec<Student>> {
        self.class_students_impl(class_id).await
    }

    async fn student_classes(&self, student_id: i64) -> Result<Vec<Class>> {
        self.student_classes_impl(student_id).await
    }

    async fn teacher_classes(&self, teacher_id: i64) -> Result<Vec<Class>> {
        self.teacher_classes_impl(teacher_id).await
    }

    // 课程与选课模块
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(teacher_id, course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses(&self, skip: Option<u64>, limit: Option<u64>) -> Result<Vec<Course>> {
        self.list_courses_impl(skip, limit).await
    }

    async fn add_teacher_to_course(&self, teacher_id: i64, course_id: i64) -> Result<bool> {
        self.add_teacher_to_course_impl(teacher_id, course_id).await
    }

    async fn enroll_student_in_course(
        &self,
        student_id: i64,
        course_id: i64,
        grade: Option<f64>,
    ) -> Result<bool> {
        self.enroll_student_in_course_impl(student_id, course_id, grade)
            .await
    }

    async fn record_grade(&self, student_id: i64, course_id: i64, grade: f64) -> Result<()> {
        self.record_grade_impl(student_id, course_id, grade).await
    }

    async fn course_students(&self, course_id: i64) -> Result<Vec<CourseStudent>> {
        self.course_students_impl(course_id).await
    }

    async fn student_courses(&self, student_id: i64) -> Result<Vec<Course>> {
        self.student_courses_impl(student_id).await
    }

    async fn transcript(&self, student_id: i64) -> Result<Vec<TranscriptEntry>> {
        self.transcript_impl(student_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(teacher_id, assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl().await
    }

    async fn assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.assignments_by_course_impl(course_id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        student_id: i64,
        assignment_id: i64,
        submit_time: chrono::DateTime<chrono::Utc>,
        file_path: &str,
    ) -> Result<Submission> {
        self.create_submission_impl(student_id, assignment_id, submit_time, file_path)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.submissions_by_assignment_impl(assignment_id).await
    }

    async fn submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.submissions_by_student_impl(student_id).await
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        self.list_submissions_impl().await
    }

    async fn delete_submission(&self, submission_id: i64) -> Result<bool> {
        self.delete_submission_impl(submission_id).await
    }

    // 权限模块
    async fn create_permission(&self, permission: CreatePermissionRequest) -> Result<Permission> {
        self.create_permission_impl(permission).await
    }

    async fn get_permission_by_id(&self, permission_id: i64) -> Result<Option<Permission>> {
        self.get_permission_by_id_impl(permission_id).await
    }

    async fn assign_permission_to_user(&self, user_id: i64, permission_id: i64) -> Result<bool> {
        self.assign_permission_to_user_impl(user_id, permission_id)
            .await
    }

    async fn user_permissions(&self, user_id: i64) -> Result<Vec<Permission>> {
        self.user_permissions_impl(user_id).await
    }
}
