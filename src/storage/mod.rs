use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段由调用方预先哈希）
    async fn create_user(&self, user: RegisterUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// 学生管理方法
    // 创建学生档案与背后的用户账号（单事务）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<StudentProfile>;
    // 给已有用户挂学生档案（双角色用户）
    async fn create_student_profile(
        &self,
        user_id: i64,
        grade_level: &str,
        major: &str,
    ) -> Result<Student>;
    // 通过ID获取学生档案
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 通过ID获取学生档案及用户账号
    async fn get_student_profile(&self, student_id: i64) -> Result<Option<StudentProfile>>;
    // 通过用户ID获取学生档案（角色解析）
    async fn student_profile_of(&self, user_id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students(&self, skip: Option<u64>, limit: Option<u64>) -> Result<Vec<Student>>;
    // 更新学生档案
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;

    /// 教师管理方法
    // 创建教师档案与背后的用户账号（单事务）
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<TeacherProfile>;
    // 通过ID获取教师档案
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;
    // 通过ID获取教师档案及用户账号
    async fn get_teacher_profile(&self, teacher_id: i64) -> Result<Option<TeacherProfile>>;
    // 通过用户ID获取教师档案（角色解析）
    async fn teacher_profile_of(&self, user_id: i64) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers(&self, skip: Option<u64>, limit: Option<u64>) -> Result<Vec<Teacher>>;
    // 更新教师档案
    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师：级联清理关联、作业、提交与背后的用户账号（单事务）
    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级：级联清理成员关联（单事务）
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 学生加入班级，重复加入返回 false
    async fn add_student_to_class(&self, student_id: i64, class_id: i64) -> Result<bool>;
    // 学生退出班级，无成员关系返回 false
    async fn remove_student_from_class(&self, student_id: i64, class_id: i64) -> Result<bool>;
    // 班级学生名单
    async fn class_students(&self, class_id: i64) -> Result<Vec<Student>>;
    // 学生所在班级
    async fn student_classes(&self, student_id: i64) -> Result<Vec<Class>>;
    // 教师负责的班级
    async fn teacher_classes(&self, teacher_id: i64) -> Result<Vec<Class>>;

    /// 课程与选课管理方法
    // 创建课程并关联授课教师（单事务）
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses(&self, skip: Option<u64>, limit: Option<u64>) -> Result<Vec<Course>>;
    // 教师关联课程，重复关联返回 false
    async fn add_teacher_to_course(&self, teacher_id: i64, course_id: i64) -> Result<bool>;
    // 学生选课，重复选课返回 false
    async fn enroll_student_in_course(
        &self,
        student_id: i64,
        course_id: i64,
        grade: Option<f64>,
    ) -> Result<bool>;
    // 录入成绩：已有选课记录则更新，否则插入带成绩的记录
    async fn record_grade(&self, student_id: i64, course_id: i64, grade: f64) -> Result<()>;
    // 课程学生名单（附成绩）
    async fn course_students(&self, course_id: i64) -> Result<Vec<CourseStudent>>;
    // 学生已选课程
    async fn student_courses(&self, student_id: i64) -> Result<Vec<Course>>;
    // 学生成绩单（课程信息联查）
    async fn transcript(&self, student_id: i64) -> Result<Vec<TranscriptEntry>>;

    /// 作业管理方法
    // 布置作业
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出全部作业
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;
    // 列出课程相关作业（经由授课教师的课程关联）
    async fn assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>>;

    /// 提交管理方法
    // 写入提交记录
    async fn create_submission(
        &self,
        student_id: i64,
        assignment_id: i64,
        submit_time: chrono::DateTime<chrono::Utc>,
        file_path: &str,
    ) -> Result<Submission>;
    // 通过ID获取提交记录
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 某作业的全部提交
    async fn submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 某学生的全部提交
    async fn submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>>;
    // 全部提交记录
    async fn list_submissions(&self) -> Result<Vec<Submission>>;
    // 删除提交记录
    async fn delete_submission(&self, submission_id: i64) -> Result<bool>;

    /// 权限管理方法
    // 创建权限
    async fn create_permission(&self, permission: CreatePermissionRequest) -> Result<Permission>;
    // 通过ID获取权限
    async fn get_permission_by_id(&self, permission_id: i64) -> Result<Option<Permission>>;
    // 授予用户权限，重复授予返回 false
    async fn assign_permission_to_user(&self, user_id: i64, permission_id: i64) -> Result<bool>;
    // 用户拥有的权限
    async fn user_permissions(&self, user_id: i64) -> Result<Vec<Permission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 用指定数据库 URL 构建存储实例（测试与嵌入方使用）
pub async fn create_storage_with_url(url: &str) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_with_url(url).await?;
    Ok(Arc::new(storage))
}
